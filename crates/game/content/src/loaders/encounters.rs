//! Encounter table loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bestiary::EncounterGroup;
use crate::loaders::{LoadResult, read_file};

/// Encounter table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterCatalog {
    pub encounters: BTreeMap<String, Vec<EncounterGroup>>,
}

/// Loader for named encounters from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<(String, Vec<EncounterGroup>)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(String, Vec<EncounterGroup>)>> {
        let catalog: EncounterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter table RON: {}", e))?;

        for (name, groups) in &catalog.encounters {
            anyhow::ensure!(!groups.is_empty(), "Encounter '{}' has no enemies", name);
        }

        Ok(catalog.encounters.into_iter().collect())
    }
}
