// Location entity
// A promotion site with a fixed prize and display identity

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub prize: String,
    pub emoji: String,
}

/// Display metadata subset served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSummary {
    pub name: String,
    pub prize: String,
    pub emoji: String,
}

impl From<&Location> for LocationSummary {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            prize: location.prize.clone(),
            emoji: location.emoji.clone(),
        }
    }
}

/// Immutable id -> Location mapping, loaded once at process start.
/// Iteration preserves catalog file order.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    entries: Vec<Location>,
    index: HashMap<String, usize>,
}

impl LocationCatalog {
    pub fn from_entries(entries: Vec<Location>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, location) in entries.iter().enumerate() {
            let id = location.id.trim();
            if id.is_empty() {
                return Err(anyhow!("catalog entry {} has an empty id", position));
            }
            if index.insert(id.to_string(), position).is_some() {
                return Err(anyhow!("duplicate location id '{}' in catalog", id));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.index.get(id).map(|position| &self.entries[*position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|location| location.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
