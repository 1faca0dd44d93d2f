//! Value objects produced by one attack.

use crate::engine::Application;
use crate::state::StatusEffect;

use super::dice::AttackRoll;
use super::hit::HitType;

/// A status effect an attack's trait put on the target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusApplication {
    /// Name of the trait that fired (e.g. `poison_on_hit`).
    pub trait_tag: &'static str,
    pub effect: StatusEffect,
    pub application: Application,
}

/// Everything one attack decided, before it is turned into text.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttackOutcome {
    pub roll: AttackRoll,
    /// Classified from the natural roll.
    pub hit_type: HitType,
    /// Modified total reached the success threshold.
    pub success: bool,
    /// Named attack mode or weapon used, if any.
    pub attack_name: Option<String>,
    /// Rolled damage after any requirement penalty.
    pub base_damage: i32,
    /// Wielder failed the weapon's stat requirements.
    pub penalized: bool,
    pub multiplier: f64,
    pub damage: i32,
    pub applications: Vec<StatusApplication>,
    /// Target health ≤ 0 after every effect of this attack.
    pub defeated: bool,
}

/// An attack's outcome plus its rendered message sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    pub lines: Vec<String>,
}
