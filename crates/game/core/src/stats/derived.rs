//! Derived combat scalars, computed once from core attributes.
//!
//! Formula for every scalar:
//!
//! ```text
//! scaled(stat, scale) = trunc(scale × (1 − e^(−stat / 5)) × 10)
//! ```
//!
//! The curve saturates, so early attribute points matter more than late ones.

use super::core::{Stat, StatBlock};

/// Saturating attribute scaling shared by all derived scalars.
pub fn scaled_stat(stats: &StatBlock, stat: Stat, scale: f64) -> i32 {
    let value = stats.get(stat) as f64;
    (scale * (1.0 - (-value / 5.0).exp()) * 10.0) as i32
}

/// Combat scalars resolved at construction time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatScalars {
    /// Maximum health (END).
    pub max_health: i32,
    /// Raw striking power (STR).
    pub power: i32,
    /// Attack roll modifier and crit-fail softening (DEX).
    pub skill: i32,
    /// Aim (PER).
    pub accuracy: i32,
}

impl CombatScalars {
    pub const BASE_HEALTH: i32 = 50;

    /// Player-style derivation from attributes.
    pub fn from_stats(stats: &StatBlock) -> Self {
        Self {
            max_health: scaled_stat(stats, Stat::End, 7.5) + Self::BASE_HEALTH,
            power: scaled_stat(stats, Stat::Str, 1.5),
            skill: scaled_stat(stats, Stat::Dex, 0.5),
            accuracy: scaled_stat(stats, Stat::Per, 0.5),
        }
    }

    /// Fixed-health creature with no trained skill.
    pub fn creature(health: i32) -> Self {
        Self {
            max_health: health,
            ..Self::default()
        }
    }
}
