use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    errors::{BackupError, Result},
    job::IdSet,
    store::{check_saveable, ensure_dir, read_object, to_pretty_json, write_pretty},
};

const CORE_DIR: &str = "core";
const ID_DIR: &str = "id";
const ID_FILE: &str = "ids.json";

/// Durable storage for the set of identifiers currently in use.
///
/// Owns `<base>/core/id/ids.json` exclusively. The base directory is passed
/// in explicitly so callers (and tests) control where the store lives.
#[derive(Debug, Clone)]
pub struct IdStore {
    dir: PathBuf,
    file: PathBuf,
}

impl IdStore {
    pub fn new(base: impl AsRef<Path>) -> Self {
        let dir = base.as_ref().join(CORE_DIR).join(ID_DIR);
        let file = dir.join(ID_FILE);
        Self { dir, file }
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.file
    }

    /// Creates the containing directory and the backing file with an empty
    /// id set if either is absent. Idempotent; an existing file is never
    /// rewritten.
    pub fn ensure_initialized(&self) -> Result<()> {
        ensure_dir(&self.dir)?;
        if !self.file.exists() {
            write_pretty(&self.file, &IdSet::default())?;
            tracing::info!(path = %self.file.display(), "created id store");
        }
        Ok(())
    }

    /// Loads the persisted id set.
    pub fn load(&self) -> Result<IdSet> {
        self.ensure_initialized()?;
        tracing::debug!(path = %self.file.display(), "loading id set");
        let value = read_object(&self.file)?;
        serde_json::from_value(value).map_err(|err| {
            BackupError::CorruptStore(format!("{}: {}", self.file.display(), err))
        })
    }

    /// Overwrites the persisted id set.
    pub fn save(&self, ids: &IdSet) -> Result<()> {
        self.ensure_initialized()?;
        tracing::debug!(path = %self.file.display(), count = ids.len(), "saving id set");
        write_pretty(&self.file, ids)
    }

    /// Saves a raw JSON value after validating that it is a non-null object.
    /// Rejected values leave the backing file untouched.
    pub fn save_value(&self, data: &Value) -> Result<()> {
        check_saveable(data)?;
        self.ensure_initialized()?;
        let json = to_pretty_json(data)?;
        std::fs::write(&self.file, json)?;
        Ok(())
    }
}
