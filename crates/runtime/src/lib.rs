//! Runtime orchestration for a single combat encounter.
//!
//! This crate wires the pure rules in `game-core` and the content tables in
//! `game-content` into a playable session. Consumers build a [`Session`] from a
//! [`RuntimeConfig`] and drive it one player command at a time.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the turn loop and its builder
//! - [`progression`] tracks per-tag skill experience
//! - [`config`] and [`error`] expose the types downstream clients interact with
pub mod config;
pub mod error;
pub mod progression;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use progression::{LevelUp, SkillProgression};
pub use session::{Session, SessionBuilder};
