//! Enemy template loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bestiary::EnemyTemplate;
use crate::loaders::{LoadResult, read_file};

/// Bestiary structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestiaryCatalog {
    pub enemies: BTreeMap<String, EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load enemy templates keyed by id from a RON file.
    ///
    /// Attack-mode lists are validated during deserialization; health must be
    /// positive so that a spawned enemy starts alive.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a bestiary from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<(String, EnemyTemplate)>> {
        let catalog: BestiaryCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        for (id, template) in &catalog.enemies {
            anyhow::ensure!(
                template.health > 0,
                "Enemy '{}' must start with positive health (got {})",
                id,
                template.health
            );
        }

        Ok(catalog.enemies.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Combatant, DamageSource};

    #[test]
    fn parses_modes_and_legacy_attacks() {
        let enemies = BestiaryLoader::parse(
            r#"#![enable(implicit_some)]
            (
                enemies: {
                    "goblin": (name: "Goblin", health: 20, attack: (min: 4, max: 8)),
                    "giant_spider": (
                        name: "Giant Spider",
                        health: 25,
                        attack_modes: [
                            (
                                name: "Venomous Bite",
                                damage: (min: 2, max: 4),
                                traits: [poison_on_hit((damage: 2, duration: 4, chance: 1.0))],
                                weight: 3,
                            ),
                            (name: "Web Wrap", damage: (min: 0, max: 0), traits: [maim((chance: 0.5))]),
                        ],
                        stealth: 1,
                    ),
                },
            )"#,
        )
        .unwrap();

        let (id, spider) = &enemies[0];
        assert_eq!(id, "giant_spider");
        let modes = spider.attack_modes.as_ref().unwrap();
        assert_eq!(modes.len(), 2);
        assert_eq!(modes.iter().nth(1).unwrap().weight, 1);
        assert_eq!(spider.size, 5);
        assert_eq!(spider.stealth, 1);

        let goblin = enemies[1].1.spawn();
        assert_eq!(goblin.health(), 20);
        assert!(matches!(goblin.damage_source(), DamageSource::Unarmed(r) if r.max() == 8));
    }

    #[test]
    fn empty_attack_modes_are_rejected() {
        let result = BestiaryLoader::parse(
            r#"#![enable(implicit_some)]
            (enemies: { "wisp": (name: "Wisp", health: 5, attack_modes: []) })"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_stat_is_rejected() {
        let result = BestiaryLoader::parse(
            r#"(enemies: { "imp": (name: "Imp", health: 5, stats: { LUCK: 3 }) })"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_health_is_rejected() {
        let err = BestiaryLoader::parse(r#"(enemies: { "husk": (name: "Husk", health: 0) })"#)
            .unwrap_err();
        assert!(err.to_string().contains("positive health"));
    }
}
