use std::collections::HashSet;

use serde::Deserialize;

use crate::engine::achievements::Condition;
use crate::error::{DatasetError, Result};

#[derive(Clone, Debug, Deserialize)]
pub struct AchievementDef {
    pub name: String,
    pub description: String,
    pub condition: Condition,
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    achievements: Vec<AchievementDef>,
}

#[derive(Clone, Debug, Default)]
pub struct AchievementCatalog {
    entries: Vec<AchievementDef>,
}

impl AchievementCatalog {
    pub fn new(entries: Vec<AchievementDef>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(DatasetError::DuplicateAchievement(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json).map_err(|source| DatasetError::Parse {
            what: "achievements".to_string(),
            source,
        })?;
        Self::new(raw.achievements)
    }

    pub fn entries(&self) -> &[AchievementDef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|a| a.name == name)
    }
}
