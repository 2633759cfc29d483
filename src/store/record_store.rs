use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{
    errors::{BackupError, Result},
    job::BackupRecord,
    store::{check_saveable, ensure_dir, read_object, to_pretty_json, write_pretty},
};

const CORE_DIR: &str = "core";
const BACKUP_DIR: &str = "backup";
const RECORD_EXTENSION: &str = "json";

/// Durable storage for backup-job metadata, one record file per job id.
///
/// Owns `<base>/core/backup/<id>.json`. A record file exists iff a job of
/// that id has been initialized; saves overwrite the whole record, callers
/// wanting a partial change must load, modify, and save.
#[derive(Debug, Clone)]
pub struct BackupRecordStore {
    dir: PathBuf,
}

impl BackupRecordStore {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            dir: base.as_ref().join(CORE_DIR).join(BACKUP_DIR),
        }
    }

    /// Path of the record file for a job id.
    pub fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{RECORD_EXTENSION}"))
    }

    /// Creates the backup directory and an all-null record file for `id` if
    /// either is absent. Idempotent; an existing record is never rewritten.
    pub fn ensure_initialized(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(BackupError::InvalidArgument("backup id is empty".into()));
        }
        ensure_dir(&self.dir)?;
        let path = self.record_path(id);
        if !path.exists() {
            write_pretty(&path, &BackupRecord::default())?;
            tracing::info!(id, path = %path.display(), "created backup record");
        }
        Ok(())
    }

    /// Loads the metadata record for a job id.
    pub fn load(&self, id: &str) -> Result<BackupRecord> {
        self.ensure_initialized(id)?;
        let path = self.record_path(id);
        tracing::debug!(id, "loading backup record");
        let value = read_object(&path)?;
        serde_json::from_value(value)
            .map_err(|err| BackupError::CorruptStore(format!("{}: {}", path.display(), err)))
    }

    /// Overwrites the metadata record for a job id.
    pub fn save(&self, id: &str, record: &BackupRecord) -> Result<()> {
        self.ensure_initialized(id)?;
        tracing::debug!(id, "saving backup record");
        write_pretty(&self.record_path(id), record)
    }

    /// Saves a raw JSON value after validating that it is a non-null object.
    /// Rejected values leave the record file untouched.
    pub fn save_value(&self, id: &str, data: &Value) -> Result<()> {
        check_saveable(data)?;
        self.ensure_initialized(id)?;
        let json = to_pretty_json(data)?;
        std::fs::write(self.record_path(id), json)?;
        Ok(())
    }
}
