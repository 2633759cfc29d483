use serde::{Deserialize, Serialize};

/// Durable set of identifiers already allocated to backup jobs.
///
/// Persisted as `{"ids_in_use": [...]}`. The vector keeps insertion order so
/// the file stays stable across load/save cycles; set semantics (no empty
/// strings, no duplicates) are enforced by [`IdSet::insert`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSet {
    pub ids_in_use: Vec<String>,
}

impl IdSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids_in_use.iter().any(|existing| existing == id)
    }

    /// Adds an id to the set. Returns `false` (and leaves the set untouched)
    /// if the id is empty or already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if id.is_empty() || self.contains(&id) {
            return false;
        }
        self.ids_in_use.push(id);
        true
    }

    pub fn len(&self) -> usize {
        self.ids_in_use.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids_in_use.is_empty()
    }
}

/// Metadata record describing a single backup job.
///
/// One record per job id, persisted whole. All fields start out `null` when
/// the record file is first created and are filled in by the caller; saves
/// always overwrite the entire record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecord {
    pub id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub temporary_folder: Option<String>,
    pub source: Option<Vec<String>>,
    pub destination: Option<String>,
}
