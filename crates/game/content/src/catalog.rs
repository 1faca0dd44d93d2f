//! Read-only lookup over weapons, enemy templates and encounters.

use std::collections::BTreeMap;

use game_core::{ConfigError, EnemyActor, Weapon};
use tracing::debug;

use crate::bestiary::{EncounterGroup, EnemyTemplate, make_multiple};
use crate::builtin;

/// Content tables keyed by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    weapons: BTreeMap<String, Weapon>,
    bestiary: BTreeMap<String, EnemyTemplate>,
    encounters: BTreeMap<String, Vec<EncounterGroup>>,
}

impl Catalog {
    pub fn new(
        weapons: impl IntoIterator<Item = (String, Weapon)>,
        bestiary: impl IntoIterator<Item = (String, EnemyTemplate)>,
        encounters: impl IntoIterator<Item = (String, Vec<EncounterGroup>)>,
    ) -> Self {
        Self {
            weapons: weapons.into_iter().collect(),
            bestiary: bestiary.into_iter().collect(),
            encounters: encounters.into_iter().collect(),
        }
    }

    /// Catalog compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        let catalog = Self::new(
            builtin::weapons()?,
            builtin::bestiary()?,
            builtin::encounters(),
        );
        debug!(
            weapons = catalog.weapons.len(),
            enemies = catalog.bestiary.len(),
            encounters = catalog.encounters.len(),
            "built-in catalog ready"
        );
        Ok(catalog)
    }

    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyTemplate> {
        self.bestiary.get(id)
    }

    pub fn weapon_ids(&self) -> impl Iterator<Item = &str> {
        self.weapons.keys().map(String::as_str)
    }

    pub fn encounter_names(&self) -> impl Iterator<Item = &str> {
        self.encounters.keys().map(String::as_str)
    }

    /// Spawns one enemy by bestiary id.
    pub fn spawn(&self, id: &str) -> Option<EnemyActor> {
        self.enemy(id).map(EnemyTemplate::spawn)
    }

    /// Spawns every enemy of a named encounter, group by group.
    ///
    /// Returns `None` if the encounter or any referenced enemy is unknown.
    pub fn encounter(&self, name: &str) -> Option<Vec<EnemyActor>> {
        let groups = self.encounters.get(name)?;
        let mut enemies = Vec::new();
        for group in groups {
            let template = self.enemy(&group.enemy)?;
            enemies.extend(make_multiple(template, group.count));
        }
        Some(enemies)
    }

    /// `(encounter, enemy id)` pairs that point at nothing in the bestiary.
    pub fn dangling_references(&self) -> Vec<(String, String)> {
        self.encounters
            .iter()
            .flat_map(|(name, groups)| {
                groups
                    .iter()
                    .filter(|group| !self.bestiary.contains_key(&group.enemy))
                    .map(move |group| (name.clone(), group.enemy.clone()))
            })
            .collect()
    }
}
