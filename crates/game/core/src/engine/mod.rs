//! Turn-tick machinery and the hooks the core calls out through.
//!
//! The status engine is the only code that mutates an actor's active effects.
//! Combat calls [`apply`] when a trait fires; the encounter loop calls
//! [`process`] once per actor per turn.

pub mod hook;
mod status;

pub use hook::{NoProgression, ProgressionHook, RecordingProgression};
pub use status::{Application, EffectEvent, apply, clear, process};
