//! Common error infrastructure for game-core.
//!
//! The combat rules themselves never fail: a bad roll or a strange trait degrades
//! to a no-op plus a message. The only fallible surface is configuration, which is
//! validated when weapons, attack modes and effects are constructed or loaded so
//! that nothing can go wrong later at roll time.
//!
//! # Design Principles
//!
//! - **Fail at load time**: malformed data is rejected before a session starts
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **Rich Context**: variants carry the offending names and values

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same session can carry on with a different action
/// - **Validation**: Invalid input that should be rejected without retry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: inverted damage range, unknown status kind in a data file
    Validation,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Invalid static data detected while building weapons, attack modes or effects.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid damage range: min {min} is greater than max {max}")]
    InvalidDamageRange { min: i32, max: i32 },

    #[error("negative damage range: {min}..={max}")]
    NegativeDamage { min: i32, max: i32 },

    #[error("attack mode list is empty")]
    NoAttackModes,

    #[error("attack modes have a total weight of zero")]
    ZeroTotalWeight,

    #[error("attack mode weights overflow")]
    WeightOverflow,

    #[error("trait chance {chance} is outside 0.0..=1.0")]
    InvalidChance { chance: String },

    #[error("{tag} has negative damage {damage}")]
    NegativeTraitDamage { tag: &'static str, damage: i32 },

    #[error("{tag} has negative duration {duration}")]
    NegativeTraitDuration { tag: &'static str, duration: i32 },

    #[error("unknown status effect kind '{0}'")]
    UnknownStatusKind(String),
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDamageRange { .. } => "CONFIG_INVALID_DAMAGE_RANGE",
            Self::NegativeDamage { .. } => "CONFIG_NEGATIVE_DAMAGE",
            Self::NoAttackModes => "CONFIG_NO_ATTACK_MODES",
            Self::ZeroTotalWeight => "CONFIG_ZERO_TOTAL_WEIGHT",
            Self::WeightOverflow => "CONFIG_WEIGHT_OVERFLOW",
            Self::InvalidChance { .. } => "CONFIG_INVALID_CHANCE",
            Self::NegativeTraitDamage { .. } => "CONFIG_NEGATIVE_TRAIT_DAMAGE",
            Self::NegativeTraitDuration { .. } => "CONFIG_NEGATIVE_TRAIT_DURATION",
            Self::UnknownStatusKind(_) => "CONFIG_UNKNOWN_STATUS_KIND",
        }
    }
}
