//! Session configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GameConfig;

/// Configuration required to start an encounter session.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Fixed RNG seed. A random seed is drawn when unset.
    pub seed: Option<u64>,
    pub player_name: String,
    /// Data directory with RON tables. The built-in catalog is used when unset.
    pub content_dir: Option<PathBuf>,
    pub encounter: String,
    /// Weapon id to equip. `None` fights bare-handed.
    pub weapon: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            player_name: Self::DEFAULT_PLAYER_NAME.to_string(),
            content_dir: None,
            encounter: Self::DEFAULT_ENCOUNTER.to_string(),
            weapon: Some(Self::DEFAULT_WEAPON.to_string()),
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_PLAYER_NAME: &'static str = "Adventurer";
    pub const DEFAULT_ENCOUNTER: &'static str = "goblin_ambush";
    pub const DEFAULT_WEAPON: &'static str = "knife";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_SEED` - RNG seed for a reproducible session (default: random)
    /// - `PLAYER_NAME` - Player character name (default: "Adventurer")
    /// - `CONTENT_DIR` - Directory with weapons/bestiary/encounters RON files
    /// - `ENCOUNTER` - Encounter name to start (default: "goblin_ambush")
    /// - `WEAPON` - Weapon id to equip; `none` fights unarmed (default: "knife")
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("GAME_SEED");

        if let Some(name) = read_env::<String>("PLAYER_NAME") {
            if !name.trim().is_empty() {
                config.player_name = name;
            }
        }

        config.content_dir = env::var("CONTENT_DIR").ok().map(PathBuf::from);

        if let Some(encounter) = read_env::<String>("ENCOUNTER") {
            config.encounter = encounter;
        }

        if let Some(weapon) = read_env::<String>("WEAPON") {
            config.weapon = match weapon.as_str() {
                "" | "none" => None,
                _ => Some(weapon),
            };
        }

        config
    }

    /// Configured seed, or a fresh one from the thread RNG.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
