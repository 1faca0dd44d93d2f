//! Read-only weapon and attack-mode data consumed by combat resolution.
//!
//! These definitions come from static content tables. Construction validates
//! them so that a malformed entry fails when the table is loaded, never when a
//! roll is made.

use crate::error::ConfigError;
use crate::state::StatusEffect;
use crate::stats::{Stat, StatBlock};

use super::rng::RngSource;

// ============================================================================
// Damage Type
// ============================================================================

/// Damage type tag carried by weapons. Informational for narration and content.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// Blades, claws, mandibles.
    Sharp,
    /// Fists, maces, rams.
    #[default]
    Blunt,
    /// Mind attacks.
    Psychic,
    /// Burns and molten matter.
    Fire,
    /// Venom and acid.
    Toxic,
    /// Beams and pulses.
    Energy,
}

// ============================================================================
// Damage Range
// ============================================================================

/// Inclusive damage range `[min, max]`, validated on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDamageRange"))]
pub struct DamageRange {
    min: i32,
    max: i32,
}

impl DamageRange {
    /// Fallback for actors with neither a weapon nor attack modes.
    pub const UNARMED: DamageRange = DamageRange { min: 1, max: 2 };

    pub fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidDamageRange { min, max });
        }
        if min < 0 {
            return Err(ConfigError::NegativeDamage { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Uniform roll within the range.
    pub fn roll(&self, rng: &mut impl RngSource) -> i32 {
        rng.range(self.min, self.max)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDamageRange {
    min: i32,
    max: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDamageRange> for DamageRange {
    type Error = ConfigError;

    fn try_from(raw: RawDamageRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Parameters for a damage-over-time trait. Missing fields take per-trait defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DotParams {
    pub damage: Option<i32>,
    pub duration: Option<i32>,
    pub chance: Option<f64>,
}

/// Parameters for a control trait (no health change).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControlParams {
    pub duration: Option<i32>,
    pub chance: Option<f64>,
}

/// On-hit trait of a weapon or attack mode.
#[derive(Clone, Copy, Debug, PartialEq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum WeaponTrait {
    PoisonOnHit(DotParams),
    Burn(DotParams),
    Bleed(DotParams),
    Blind(ControlParams),
    Maim(ControlParams),
}

impl WeaponTrait {
    pub const DEFAULT_CHANCE: f64 = 1.0;

    /// Data-file name of the trait, also used as the experience tag.
    pub fn tag(&self) -> &'static str {
        self.into()
    }

    /// Probability that a successful hit applies the effect.
    pub fn chance(&self) -> f64 {
        match self {
            Self::PoisonOnHit(p) | Self::Burn(p) | Self::Bleed(p) => p.chance,
            Self::Blind(p) | Self::Maim(p) => p.chance,
        }
        .unwrap_or(Self::DEFAULT_CHANCE)
    }

    /// The status effect this trait inflicts.
    pub fn effect(&self) -> StatusEffect {
        match self {
            Self::PoisonOnHit(p) => {
                StatusEffect::poison(p.damage.unwrap_or(2), p.duration.unwrap_or(3))
            }
            Self::Burn(p) => StatusEffect::burn(p.damage.unwrap_or(1), p.duration.unwrap_or(3)),
            Self::Bleed(p) => StatusEffect::bleed(p.damage.unwrap_or(1), p.duration.unwrap_or(3)),
            Self::Blind(p) => StatusEffect::blind(p.duration.unwrap_or(2)),
            Self::Maim(p) => StatusEffect::maim(p.duration.unwrap_or(2)),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let chance = self.chance();
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::InvalidChance {
                chance: chance.to_string(),
            });
        }
        let (damage, duration) = match self {
            Self::PoisonOnHit(p) | Self::Burn(p) | Self::Bleed(p) => (p.damage, p.duration),
            Self::Blind(p) | Self::Maim(p) => (None, p.duration),
        };
        if let Some(damage) = damage.filter(|damage| *damage < 0) {
            return Err(ConfigError::NegativeTraitDamage {
                tag: self.tag(),
                damage,
            });
        }
        if let Some(duration) = duration.filter(|duration| *duration < 0) {
            return Err(ConfigError::NegativeTraitDuration {
                tag: self.tag(),
                duration,
            });
        }
        Ok(())
    }
}

fn validate_traits(traits: &[WeaponTrait]) -> Result<(), ConfigError> {
    traits.iter().try_for_each(WeaponTrait::validate)
}

// ============================================================================
// Weapon
// ============================================================================

/// A stat requirement the wielder fails to meet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnmetRequirement {
    pub stat: Stat,
    pub required: i32,
    pub actual: i32,
}

/// Equippable player weapon.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub damage: DamageRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_type: DamageType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: Vec<WeaponTrait>,
    /// Unmet requirements halve rolled damage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: StatBlock,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

impl Weapon {
    pub fn new(
        name: impl Into<String>,
        damage: DamageRange,
        damage_type: DamageType,
    ) -> Self {
        Self {
            name: name.into(),
            damage,
            damage_type,
            traits: Vec::new(),
            requirements: StatBlock::new(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_trait(mut self, weapon_trait: WeaponTrait) -> Self {
        self.traits.push(weapon_trait);
        self
    }

    #[must_use]
    pub fn with_requirement(mut self, stat: Stat, required: i32) -> Self {
        self.requirements.set(stat, required);
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Requirements the given stats fail, in stat order.
    pub fn unmet_requirements(&self, stats: &StatBlock) -> Vec<UnmetRequirement> {
        self.requirements
            .iter()
            .filter_map(|(stat, required)| {
                let actual = stats.get(stat);
                (actual < required).then_some(UnmetRequirement {
                    stat,
                    required,
                    actual,
                })
            })
            .collect()
    }

    pub fn meets_requirements(&self, stats: &StatBlock) -> bool {
        self.unmet_requirements(stats).is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_traits(&self.traits)
    }
}

// ============================================================================
// Attack Modes
// ============================================================================

/// A named enemy attack with its own damage range, traits and selection weight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackMode {
    pub name: String,
    pub damage: DamageRange,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: Vec<WeaponTrait>,
    #[cfg_attr(feature = "serde", serde(default = "AttackMode::default_weight"))]
    pub weight: u32,
}

impl AttackMode {
    pub fn new(name: impl Into<String>, damage: DamageRange) -> Self {
        Self {
            name: name.into(),
            damage,
            traits: Vec::new(),
            weight: Self::default_weight(),
        }
    }

    pub const fn default_weight() -> u32 {
        1
    }

    #[must_use]
    pub fn with_trait(mut self, weapon_trait: WeaponTrait) -> Self {
        self.traits.push(weapon_trait);
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }
}

/// Non-empty set of attack modes with a positive total weight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<AttackMode>", into = "Vec<AttackMode>"))]
pub struct AttackModes {
    modes: Vec<AttackMode>,
    total_weight: u32,
}

impl AttackModes {
    pub fn new(modes: Vec<AttackMode>) -> Result<Self, ConfigError> {
        if modes.is_empty() {
            return Err(ConfigError::NoAttackModes);
        }
        for mode in &modes {
            validate_traits(&mode.traits)?;
        }
        let total_weight = modes
            .iter()
            .try_fold(0u32, |total, m| total.checked_add(m.weight))
            .ok_or(ConfigError::WeightOverflow)?;
        if total_weight == 0 {
            return Err(ConfigError::ZeroTotalWeight);
        }
        Ok(Self {
            modes,
            total_weight,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttackMode> {
        self.modes.iter()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Weighted random choice. Zero-weight modes are never picked.
    pub fn select(&self, rng: &mut impl RngSource) -> &AttackMode {
        let mut pick = rng.next_u32() % self.total_weight;
        for mode in &self.modes {
            if pick < mode.weight {
                return mode;
            }
            pick -= mode.weight;
        }
        // total_weight is the exact sum, so the loop always returns.
        &self.modes[self.modes.len() - 1]
    }
}

impl TryFrom<Vec<AttackMode>> for AttackModes {
    type Error = ConfigError;

    fn try_from(modes: Vec<AttackMode>) -> Result<Self, Self::Error> {
        Self::new(modes)
    }
}

impl From<AttackModes> for Vec<AttackMode> {
    fn from(modes: AttackModes) -> Self {
        modes.modes
    }
}
