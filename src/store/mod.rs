//! JSON-file persistence for the id set and per-job backup records.
//!
//! Both stores follow the same pattern: ensure the containing directory and
//! backing file exist, then read or write the whole file in one step. Writes
//! are plain whole-file overwrites; there is no locking and no atomic-rename
//! staging, so a single-process, single-writer deployment is assumed.

pub mod id_store;
pub mod record_store;

use std::{fs, io::ErrorKind, path::Path};

use serde::Serialize;
use serde_json::Value;

use crate::errors::{BackupError, Result};

pub use id_store::IdStore;
pub use record_store::BackupRecordStore;

pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Reads a store file and parses it as a JSON object.
///
/// Distinguishes the three read-side failures: the file vanishing between
/// the existence check and the read (`NotFound`), syntactically invalid
/// JSON (`Decode`), and valid JSON of the wrong shape (`CorruptStore`).
pub(crate) fn read_object(path: &Path) -> Result<Value> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(BackupError::NotFound(path.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };
    let value: Value = serde_json::from_str(&data)
        .map_err(|err| BackupError::Decode(format!("{}: {}", path.display(), err)))?;
    if !value.is_object() {
        return Err(BackupError::CorruptStore(format!(
            "{}: expected a JSON object",
            path.display()
        )));
    }
    Ok(value)
}

/// Serializes a value as pretty-printed JSON with 4-space indentation.
///
/// `serde_json` leaves non-ASCII characters unescaped, matching the
/// persisted UTF-8 format.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| BackupError::InvalidArgument(format!("unserializable value: {err}")))?;
    String::from_utf8(buf)
        .map_err(|err| BackupError::InvalidArgument(format!("non-UTF-8 output: {err}")))
}

/// Overwrites the file at `path` with the pretty-printed form of `value`.
pub(crate) fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = to_pretty_json(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Validates a caller-supplied raw value before it is persisted.
///
/// Save operations accept only JSON objects; `null` and every other shape
/// are rejected before any filesystem access happens.
pub(crate) fn check_saveable(value: &Value) -> Result<()> {
    if value.is_null() {
        return Err(BackupError::InvalidArgument("data is null".into()));
    }
    if !value.is_object() {
        return Err(BackupError::InvalidArgument(
            "data is not a JSON object".into(),
        ));
    }
    Ok(())
}
