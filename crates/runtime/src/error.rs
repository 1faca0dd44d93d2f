//! Unified error types surfaced by the runtime API.
//!
//! Wraps content loading and rules configuration failures so the client can
//! bubble them up with consistent context.
use game_core::{ConfigError, ErrorSeverity, GameError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown encounter '{name}'")]
    UnknownEncounter { name: String },

    #[error("unknown weapon '{id}'")]
    UnknownWeapon { id: String },

    #[error("encounter '{name}' spawns no enemies")]
    EmptyEncounter { name: String },

    #[error("no visible enemy at position {index} ({visible} visible)")]
    InvalidTarget { index: usize, visible: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidTarget { .. } => ErrorSeverity::Recoverable,
            Self::Config(err) => err.severity(),
            Self::UnknownEncounter { .. }
            | Self::UnknownWeapon { .. }
            | Self::EmptyEncounter { .. }
            | Self::Content(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEncounter { .. } => "RUNTIME_UNKNOWN_ENCOUNTER",
            Self::UnknownWeapon { .. } => "RUNTIME_UNKNOWN_WEAPON",
            Self::EmptyEncounter { .. } => "RUNTIME_EMPTY_ENCOUNTER",
            Self::InvalidTarget { .. } => "RUNTIME_INVALID_TARGET",
            Self::Config(err) => err.error_code(),
            Self::Content(_) => "RUNTIME_CONTENT",
        }
    }
}
