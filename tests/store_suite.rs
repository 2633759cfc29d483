use std::fs;

use backup_core::{
    errors::BackupError,
    job::BackupRecord,
    store::{BackupRecordStore, IdStore},
};
use serde_json::{json, Value};
use tempfile::tempdir;

fn full_record() -> BackupRecord {
    BackupRecord {
        id: Some("abc123".into()),
        date: Some("2024-01-01".into()),
        time: Some("10:00".into()),
        temporary_folder: Some("/tmp/x".into()),
        source: Some(vec!["/a".into(), "/b".into()]),
        destination: Some("/backup".into()),
    }
}

#[test]
fn id_store_initialization_is_idempotent_and_byte_stable() {
    let temp = tempdir().expect("temp dir");
    let store = IdStore::new(temp.path());

    store.ensure_initialized().expect("first init");
    let first = fs::read(store.file_path()).expect("read after first init");

    store.ensure_initialized().expect("second init");
    let second = fs::read(store.file_path()).expect("read after second init");

    assert_eq!(first, second, "re-initialization must not rewrite the file");

    let parsed: Value = serde_json::from_slice(&first).expect("default content is JSON");
    assert_eq!(parsed, json!({"ids_in_use": []}));
}

#[test]
fn id_store_file_lands_in_core_id() {
    let temp = tempdir().expect("temp dir");
    let store = IdStore::new(temp.path());
    store.ensure_initialized().expect("init");

    assert_eq!(
        store.file_path(),
        temp.path().join("core").join("id").join("ids.json")
    );
    assert!(store.file_path().exists());
}

#[test]
fn record_round_trips_through_save_and_load() {
    let temp = tempdir().expect("temp dir");
    let store = BackupRecordStore::new(temp.path());

    let record = full_record();
    store.save("abc123", &record).expect("save record");
    let loaded = store.load("abc123").expect("load record");
    assert_eq!(loaded, record);
}

#[test]
fn corrupt_content_is_rejected_with_distinct_errors() {
    let temp = tempdir().expect("temp dir");
    let store = BackupRecordStore::new(temp.path());
    store.ensure_initialized("abc123").expect("init");
    let path = store.record_path("abc123");

    // Valid JSON, wrong shape.
    fs::write(&path, "\"not an object\"").expect("write scalar");
    let err = store.load("abc123").expect_err("wrong shape");
    assert!(matches!(err, BackupError::CorruptStore(_)), "{err:?}");

    // A field of the wrong type is also a shape error.
    fs::write(&path, "{\"id\": null, \"source\": \"not-a-list\"}").expect("write wrong object");
    let err = store.load("abc123").expect_err("wrong field type");
    assert!(matches!(err, BackupError::CorruptStore(_)), "{err:?}");

    // Not JSON at all.
    fs::write(&path, "{invalid json").expect("write garbage");
    let err = store.load("abc123").expect_err("invalid json");
    assert!(matches!(err, BackupError::Decode(_)), "{err:?}");

    // The id set, by contrast, has a required key.
    let ids = IdStore::new(temp.path());
    ids.ensure_initialized().expect("init id store");
    fs::write(ids.file_path(), "{\"unexpected\": true}").expect("write wrong object");
    let err = ids.load().expect_err("missing ids_in_use");
    assert!(matches!(err, BackupError::CorruptStore(_)), "{err:?}");
}

#[test]
fn save_value_validates_before_touching_the_file() {
    let temp = tempdir().expect("temp dir");
    let store = BackupRecordStore::new(temp.path());

    // Rejected saves on a fresh id must not even create the file.
    let err = store
        .save_value("fresh", &Value::Null)
        .expect_err("null rejected");
    assert!(matches!(err, BackupError::InvalidArgument(_)), "{err:?}");
    assert!(!store.record_path("fresh").exists());

    store.save("abc123", &full_record()).expect("save record");
    let before = fs::read(store.record_path("abc123")).expect("read before");

    let err = store
        .save_value("abc123", &json!(["not", "a", "dict"]))
        .expect_err("array rejected");
    assert!(matches!(err, BackupError::InvalidArgument(_)), "{err:?}");

    let after = fs::read(store.record_path("abc123")).expect("read after");
    assert_eq!(before, after);
}

#[test]
fn persisted_form_is_pretty_printed_with_four_space_indent() {
    let temp = tempdir().expect("temp dir");
    let store = BackupRecordStore::new(temp.path());
    store.save("abc123", &full_record()).expect("save record");

    let text = fs::read_to_string(store.record_path("abc123")).expect("read record");
    assert!(text.contains("\n    \"id\""), "expected 4-space indent:\n{text}");
}

#[test]
fn fresh_environment_end_to_end() {
    let temp = tempdir().expect("temp dir");
    let store = BackupRecordStore::new(temp.path());

    store.ensure_initialized("abc123").expect("init record");
    let record_file = temp
        .path()
        .join("core")
        .join("backup")
        .join("abc123.json");
    assert!(record_file.exists());
    assert_eq!(store.record_path("abc123"), record_file);

    let initial = store.load("abc123").expect("load default");
    assert_eq!(initial, BackupRecord::default());

    let record = full_record();
    store.save("abc123", &record).expect("save full record");
    let loaded = store.load("abc123").expect("load full record");
    assert_eq!(loaded, record);
}
