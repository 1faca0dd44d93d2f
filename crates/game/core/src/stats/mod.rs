//! Actor attributes and the combat scalars derived from them.
//!
//! # Layers
//!
//! 1. [`StatBlock`]: the stored attribute mapping (STR, DEX, AGI, PER, PSI, CHA, END)
//! 2. [`CombatScalars`]: health, power, skill and accuracy derived once at
//!    construction and never recomputed mid-encounter

pub mod core;
pub mod derived;

pub use self::core::{Stat, StatBlock};
pub use derived::{CombatScalars, scaled_stat};
