//! Search history of the command line.
//!
//! A small JSON file with the most recent successful lookups, newest first.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::HISTORY_CAPACITY;
use crate::models::{PlayerIdentity, Region};

/// One remembered lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    pub realm: String,
    pub region: Region,
}

impl From<&PlayerIdentity> for HistoryEntry {
    fn from(identity: &PlayerIdentity) -> Self {
        HistoryEntry {
            name: identity.character.clone(),
            realm: identity.realm.clone(),
            region: identity.region,
        }
    }
}

impl HistoryEntry {
    pub fn identity(&self) -> PlayerIdentity {
        PlayerIdentity::new(self.region, self.realm.clone(), self.name.clone())
    }
}

/// Persistent, bounded, most-recent-first list of lookups.
#[derive(Debug, Clone)]
pub struct SearchHistory {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl SearchHistory {
    /// Reads the history file; a missing file is an empty history.
    pub async fn load(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e),
        };
        Ok(SearchHistory { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Puts `identity` at the front, removing an earlier identical entry.
    pub fn record(&mut self, identity: &PlayerIdentity) {
        let entry = HistoryEntry::from(identity);
        self.entries.retain(|existing| *existing != entry);
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Removes the entry at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<HistoryEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub async fn save(&self) -> io::Result<()> {
        let json = serde_json::to_vec_pretty(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, json).await
    }
}
