//! Content factory for building a catalog from data files.

use std::path::{Path, PathBuf};

use game_core::GameConfig;
use tracing::info;

use crate::catalog::Catalog;
use crate::loaders::{BestiaryLoader, ConfigLoader, EncounterLoader, LoadResult, WeaponLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── weapons.ron
/// ├── bestiary.ron
/// └── encounters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules configuration from `rules.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load and cross-check weapons, bestiary and encounters.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let weapons = WeaponLoader::load(&self.data_dir.join("weapons.ron"))?;
        let bestiary = BestiaryLoader::load(&self.data_dir.join("bestiary.ron"))?;
        let encounters = EncounterLoader::load(&self.data_dir.join("encounters.ron"))?;

        let catalog = Catalog::new(weapons, bestiary, encounters);
        if let Some((encounter, enemy)) = catalog.dangling_references().into_iter().next() {
            anyhow::bail!(
                "Encounter '{}' references unknown enemy '{}'",
                encounter,
                enemy
            );
        }

        info!(
            data_dir = %self.data_dir.display(),
            weapons = catalog.weapon_ids().count(),
            encounters = catalog.encounter_names().count(),
            "content catalog loaded"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn seed(dir: &TempDir, encounters: &str) {
        write(
            dir,
            "weapons.ron",
            r#"(weapons: { "knife": (name: "Hunting Knife", damage: (min: 3, max: 6), damage_type: sharp) })"#,
        );
        write(
            dir,
            "bestiary.ron",
            r#"#![enable(implicit_some)]
            (enemies: { "goblin": (name: "Goblin", health: 20, attack: (min: 4, max: 8)) })"#,
        );
        write(dir, "encounters.ron", encounters);
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_a_consistent_directory() {
        let dir = TempDir::new().unwrap();
        seed(&dir, r#"(encounters: { "pair": [(enemy: "goblin", count: 2)] })"#);
        write(&dir, "rules.toml", "search_bonus = 5\n");

        let factory = ContentFactory::new(dir.path());
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(catalog.encounter("pair").unwrap().len(), 2);
        assert_eq!(factory.load_config().unwrap().search_bonus, 5);
    }

    #[test]
    fn missing_rules_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn dangling_enemy_reference_fails() {
        let dir = TempDir::new().unwrap();
        seed(&dir, r#"(encounters: { "lair": [(enemy: "dragon")] })"#);

        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("unknown enemy 'dragon'"));
    }

    #[test]
    fn shipped_data_matches_builtin_catalog() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data");
        let factory = ContentFactory::new(data_dir);
        assert_eq!(factory.load_catalog().unwrap(), Catalog::builtin().unwrap());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = TempDir::new().unwrap();
        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("weapons.ron"));
    }
}
