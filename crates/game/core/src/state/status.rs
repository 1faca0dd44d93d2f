//! Status effect data carried by actors.
//!
//! Effects are ticked once per turn by the status engine ([`crate::engine`]).
//! A duration counts remaining ticks; an effect without a duration is permanent
//! until explicitly cleared.
//!
//! Only the engine mutates an actor's [`StatusEffects`]; everything else reads.

use crate::error::ConfigError;

/// Kinds of status effects.
///
/// Every kind has an explicit tick handler in the engine, so the set is closed:
/// names that do not parse into a variant are rejected when data is loaded.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatusKind {
    // ========================================================================
    // Damage over time (stacking)
    // ========================================================================
    /// Venom damage every tick.
    Poison,
    /// Fire damage every tick.
    Burn,
    /// Blood loss every tick.
    Bleed,

    // ========================================================================
    // Non-stacking (refresh in place)
    // ========================================================================
    /// Heals every tick.
    Regen,
    /// Vision impaired.
    Blind,
    /// Movement and footing impaired.
    Maim,
}

impl StatusKind {
    /// Kinds whose concurrent instances coexist and sum each tick.
    pub const STACKING: [StatusKind; 3] = [StatusKind::Poison, StatusKind::Burn, StatusKind::Bleed];

    /// Returns true if multiple instances of this kind coexist.
    pub const fn is_stacking(self) -> bool {
        matches!(self, Self::Poison | Self::Burn | Self::Bleed)
    }

    /// Returns true for control states that never touch health.
    pub const fn is_control(self) -> bool {
        matches!(self, Self::Blind | Self::Maim)
    }

    /// Parses a data-file name into a kind, failing configuration validation
    /// for anything without a tick handler.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        name.parse()
            .map_err(|_| ConfigError::UnknownStatusKind(name.to_string()))
    }
}

/// A single status effect instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Damage (stacking kinds) or heal (regen) per tick. Zero for control kinds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub magnitude: i32,
    /// Remaining ticks. `None` never expires on its own.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: Option<i32>,
}

impl StatusEffect {
    pub const fn new(kind: StatusKind, magnitude: i32, duration: Option<i32>) -> Self {
        Self {
            kind,
            magnitude,
            duration,
        }
    }

    pub const fn poison(damage: i32, duration: i32) -> Self {
        Self::new(StatusKind::Poison, damage, Some(duration))
    }

    pub const fn burn(damage: i32, duration: i32) -> Self {
        Self::new(StatusKind::Burn, damage, Some(duration))
    }

    pub const fn bleed(damage: i32, duration: i32) -> Self {
        Self::new(StatusKind::Bleed, damage, Some(duration))
    }

    pub const fn regen(heal: i32, duration: i32) -> Self {
        Self::new(StatusKind::Regen, heal, Some(duration))
    }

    pub const fn blind(duration: i32) -> Self {
        Self::new(StatusKind::Blind, 0, Some(duration))
    }

    pub const fn maim(duration: i32) -> Self {
        Self::new(StatusKind::Maim, 0, Some(duration))
    }

    /// Same effect with no expiry.
    #[must_use]
    pub const fn permanent(mut self) -> Self {
        self.duration = None;
        self
    }

    /// Decrements the remaining duration; returns true once it has run out.
    pub(crate) fn tick_duration(&mut self) -> bool {
        match self.duration.as_mut() {
            Some(remaining) => {
                *remaining -= 1;
                *remaining <= 0
            }
            None => false,
        }
    }
}

/// Active status effects on an actor.
///
/// Ordering carries no meaning. Stacking kinds may appear several times;
/// non-stacking kinds appear at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatusEffects {
    effects: Vec<StatusEffect>,
}

impl StatusEffects {
    /// Creates an empty status effect set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Checks if any instance of a kind is active.
    pub fn has(&self, kind: StatusKind) -> bool {
        self.effects.iter().any(|e| e.kind == kind)
    }

    /// Number of active instances of a kind.
    pub fn count(&self, kind: StatusKind) -> usize {
        self.effects.iter().filter(|e| e.kind == kind).count()
    }

    /// First active instance of a kind.
    pub fn find(&self, kind: StatusKind) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    /// Returns an iterator over all active effects.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub(crate) fn push(&mut self, effect: StatusEffect) {
        self.effects.push(effect);
    }

    pub(crate) fn find_mut(&mut self, kind: StatusKind) -> Option<&mut StatusEffect> {
        self.effects.iter_mut().find(|e| e.kind == kind)
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [StatusEffect] {
        &mut self.effects
    }

    /// Removes instances by position, returning them in ascending position order.
    pub(crate) fn remove_indices(&mut self, indices: &[usize]) -> Vec<StatusEffect> {
        let mut removed = Vec::with_capacity(indices.len());
        let mut kept = Vec::with_capacity(self.effects.len());
        for (index, effect) in self.effects.drain(..).enumerate() {
            if indices.contains(&index) {
                removed.push(effect);
            } else {
                kept.push(effect);
            }
        }
        self.effects = kept;
        removed
    }

    /// Removes every instance of a kind, returning how many were removed.
    pub(crate) fn remove_kind(&mut self, kind: StatusKind) -> usize {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        before - self.effects.len()
    }
}
