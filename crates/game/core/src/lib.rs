//! Deterministic combat rules shared by the runtime and content tooling.
//!
//! `game-core` owns the dice, the damage curve, perception checks and the
//! status effect engine. It never reaches for ambient randomness: every roll
//! goes through an injected [`RngSource`], so a seed (or a scripted sequence)
//! replays an encounter exactly.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;
pub mod stats;
pub mod visibility;

pub use combat::{
    AttackOutcome, AttackReport, AttackRequest, AttackRoll, CombatResolver, HitType,
    InitiativeRoll, Party, StatusApplication, classify, roll_attack, roll_initiative,
};
pub use config::GameConfig;
pub use engine::{Application, EffectEvent, NoProgression, ProgressionHook};
pub use env::{
    AttackMode, AttackModes, ControlParams, DamageRange, DamageType, DotParams, PcgRng,
    RngSource, ScriptedRng, UnmetRequirement, Weapon, WeaponTrait,
};
pub use error::{ConfigError, ErrorSeverity, GameError};
pub use state::{
    Actor, ActorState, Buffs, Combatant, DamageSource, EnemyActor, PlayerActor, StatusEffect,
    StatusEffects, StatusKind,
};
pub use stats::{CombatScalars, Stat, StatBlock};
pub use visibility::{SearchBonus, effective_perception, is_detectable, visible_targets};
