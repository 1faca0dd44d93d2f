//! Core attributes and the stat mapping every actor carries.

use std::collections::BTreeMap;

/// Named attribute of an actor.
///
/// - **STR** (Strength): melee power
/// - **DEX** (Dexterity): attack skill, crit-fail softening
/// - **AGI** (Agility): initiative
/// - **PER** (Perception): detection, initiative, accuracy
/// - **PSI** (Psionics): psychic weapon requirements
/// - **CHA** (Charisma)
/// - **END** (Endurance): maximum health
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
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Stat {
    #[cfg_attr(feature = "serde", serde(rename = "STR"))]
    Str,
    #[cfg_attr(feature = "serde", serde(rename = "DEX"))]
    Dex,
    #[cfg_attr(feature = "serde", serde(rename = "AGI"))]
    Agi,
    #[cfg_attr(feature = "serde", serde(rename = "PER"))]
    Per,
    #[cfg_attr(feature = "serde", serde(rename = "PSI"))]
    Psi,
    #[cfg_attr(feature = "serde", serde(rename = "CHA"))]
    Cha,
    #[cfg_attr(feature = "serde", serde(rename = "END"))]
    End,
}

/// Mapping from attribute to score. Attributes that were never set read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StatBlock {
    values: BTreeMap<Stat, i32>,
}

impl StatBlock {
    /// Default score for every attribute of a fresh player character.
    pub const PLAYER_BASELINE: i32 = 4;

    pub fn new() -> Self {
        Self::default()
    }

    /// Every attribute set to the same value.
    pub fn uniform(value: i32) -> Self {
        use strum::IntoEnumIterator;
        Self {
            values: Stat::iter().map(|stat| (stat, value)).collect(),
        }
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, stat: Stat, value: i32) -> Self {
        self.set(stat, value);
        self
    }

    pub fn get(&self, stat: Stat) -> i32 {
        self.values.get(&stat).copied().unwrap_or(0)
    }

    pub fn set(&mut self, stat: Stat, value: i32) {
        self.values.insert(stat, value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        self.values.iter().map(|(stat, value)| (*stat, *value))
    }
}

impl FromIterator<(Stat, i32)> for StatBlock {
    fn from_iter<T: IntoIterator<Item = (Stat, i32)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
