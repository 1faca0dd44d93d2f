//! Inputs the rules consume but never own.
//!
//! [`rng`] supplies injected randomness; [`items`] holds the read-only weapon and
//! attack-mode data that content tables provide.
mod items;
mod rng;

pub use items::{
    AttackMode, AttackModes, ControlParams, DamageRange, DamageType, DotParams,
    UnmetRequirement, Weapon, WeaponTrait,
};
pub use rng::{PcgRng, RngSource, ScriptedRng};
