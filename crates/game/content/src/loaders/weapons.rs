//! Weapon table loader.

use std::collections::BTreeMap;
use std::path::Path;

use game_core::Weapon;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Weapon table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: BTreeMap<String, Weapon>,
}

/// Loader for weapon tables from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load weapons keyed by id from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<(String, Weapon)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a weapon table from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<(String, Weapon)>> {
        let catalog: WeaponCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon table RON: {}", e))?;

        for (id, weapon) in &catalog.weapons {
            weapon
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid weapon '{}': {}", id, e))?;
        }

        Ok(catalog.weapons.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{DamageType, Stat, WeaponTrait};

    #[test]
    fn parses_traits_and_requirements() {
        let weapons = WeaponLoader::parse(
            r#"#![enable(implicit_some)]
            (
                weapons: {
                    "eldritch_blade": (
                        name: "Eldritch Blade",
                        damage: (min: 8, max: 16),
                        damage_type: psychic,
                        traits: [bleed((chance: 1.0))],
                        requirements: { PSI: 7, DEX: 5 },
                    ),
                    "knife": (
                        name: "Hunting Knife",
                        damage: (min: 3, max: 6),
                        damage_type: sharp,
                    ),
                },
            )"#,
        )
        .unwrap();

        assert_eq!(weapons.len(), 2);
        let (id, blade) = &weapons[0];
        assert_eq!(id, "eldritch_blade");
        assert_eq!(blade.damage_type, DamageType::Psychic);
        assert_eq!(blade.requirements.get(Stat::Psi), 7);
        assert!(matches!(blade.traits[0], WeaponTrait::Bleed(_)));
        assert_eq!(blade.traits[0].chance(), 1.0);
        assert!(weapons[1].1.traits.is_empty());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = WeaponLoader::parse(
            r#"(weapons: { "bent": (name: "Bent Spoon", damage: (min: 5, max: 2)) })"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("weapon table"));
    }

    #[test]
    fn unknown_trait_is_rejected() {
        let result = WeaponLoader::parse(
            r#"(weapons: { "odd": (name: "Odd", damage: (min: 1, max: 2), traits: [freeze((chance: 1.0))]) })"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn bad_chance_is_rejected() {
        let err = WeaponLoader::parse(
            r#"#![enable(implicit_some)]
            (weapons: { "odd": (name: "Odd", damage: (min: 1, max: 2), traits: [maim((chance: 2.0))]) })"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid weapon 'odd'"));
    }

    #[test]
    fn negative_poison_is_rejected() {
        let err = WeaponLoader::parse(
            r#"#![enable(implicit_some)]
            (weapons: { "tonic": (name: "Tonic Dart", damage: (min: 1, max: 2), traits: [poison_on_hit((damage: -5, duration: -2))]) })"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid weapon 'tonic': poison_on_hit has negative damage -5"
        );
    }
}
