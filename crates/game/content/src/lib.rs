//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Weapon tables (data-driven via RON)
//! - Enemy templates (data-driven via RON)
//! - Encounter groups (data-driven via RON)
//! - Rules configuration (data-driven via TOML)
//!
//! A built-in catalog mirrors the shipped data files so a session can start
//! without touching the filesystem.
//!
//! Content is consumed read-only by the runtime and never mutated by combat.

pub mod bestiary;
pub mod builtin;
pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bestiary::{EncounterGroup, EnemyTemplate, make_multiple};
pub use catalog::Catalog;

#[cfg(feature = "loaders")]
pub use loaders::{
    BestiaryLoader, ConfigLoader, ContentFactory, EncounterLoader, LoadResult, WeaponLoader,
};
