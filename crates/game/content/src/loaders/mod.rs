//! Content loaders for reading game data from files.
//!
//! Every loader validates while it parses: inverted damage ranges, empty or
//! weightless attack-mode lists, out-of-range trait chances and unknown stat,
//! trait or status names all fail here, before a session starts.

pub mod bestiary;
pub mod config;
pub mod encounters;
pub mod factory;
pub mod weapons;

pub use bestiary::BestiaryLoader;
pub use config::ConfigLoader;
pub use encounters::EncounterLoader;
pub use factory::ContentFactory;
pub use weapons::WeaponLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
