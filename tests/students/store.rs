//! Record store behavior over a real file.

use std::fs;

use serde_json::{json, Value};
use student_records::{JsonFileStore, RecordStore, StoreError};

use crate::support::{ada, data_file, fields, file_store};

#[test]
fn insert_then_find_round_trips() {
    let (_dir, store) = file_store();

    let input = json!({ "name": "Grace", "age": 17, "className": "11C", "guardian": "M. Hopper" });
    let created = store.insert(fields(input.clone())).unwrap();
    let id = created.id().unwrap();

    let found = store.find_by_id(&id).unwrap();
    let mut expected = fields(input);
    expected.insert("id".into(), json!(id));
    assert_eq!(Value::from(found), Value::Object(expected));
}

#[test]
fn ids_continue_from_the_largest_on_disk() {
    let (dir, store) = file_store();
    fs::write(
        data_file(&dir),
        r#"[{"id":"1","name":"A"},{"id":"2","name":"B"},{"id":"5","name":"C"}]"#,
    )
    .unwrap();

    let created = store.insert(fields(ada())).unwrap();
    assert_eq!(created.id().as_deref(), Some("6"));

    let ids: Vec<String> = store.load_all().iter().filter_map(|r| r.id()).collect();
    assert_eq!(ids, vec!["1", "2", "5", "6"]);
}

#[test]
fn update_merges_instead_of_replacing() {
    let (_dir, store) = file_store();
    store.insert(fields(ada())).unwrap();

    let merged = store.update_by_id("1", fields(json!({ "age": 17 }))).unwrap();
    assert_eq!(
        Value::from(merged),
        json!({ "name": "Ada", "age": 17, "className": "10A", "id": "1" })
    );

    let reread = store.find_by_id("1").unwrap();
    assert_eq!(reread.name(), Some("Ada"));
    assert_eq!(reread.class_name(), Some("10A"));
    assert_eq!(reread.age(), Some(17.0));
}

#[test]
fn deleting_a_missing_id_is_not_found_and_changes_nothing() {
    let (_dir, store) = file_store();
    store.insert(fields(ada())).unwrap();
    let before = store.load_all();

    let err = store.delete_by_id("42").unwrap_err();
    assert_eq!(err, StoreError::NotFound { id: "42".into() });
    assert_eq!(store.load_all(), before);
}

#[test]
fn every_operation_rereads_the_file() {
    let (dir, store) = file_store();
    store.insert(fields(ada())).unwrap();

    // Another writer replaces the file behind the store's back.
    fs::write(data_file(&dir), r#"[{"id":"9","name":"Zed"}]"#).unwrap();

    assert!(store.find_by_id("1").is_none());
    assert_eq!(store.find_by_id("9").unwrap().name(), Some("Zed"));
}

#[test]
fn unreadable_and_corrupt_files_read_as_empty() {
    let (dir, store) = file_store();

    fs::write(data_file(&dir), "[{\"id\": \"1\",").unwrap();
    assert!(store.load_all().is_empty());

    fs::write(data_file(&dir), "{\"id\": \"1\"}").unwrap();
    assert!(store.load_all().is_empty());

    // A directory where the file should be cannot be read as a file.
    let as_dir = JsonFileStore::new(dir.path());
    assert!(as_dir.load_all().is_empty());
}

#[test]
fn persist_failure_is_distinct_from_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("no-such-dir").join("students.json"));

    let err = store.insert(fields(ada())).unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, StoreError::Storage { .. }));
}

#[test]
fn separate_handles_on_one_file_see_each_other() {
    let (dir, store) = file_store();
    let other = JsonFileStore::new(data_file(&dir));

    store.insert(fields(ada())).unwrap();
    let second = other.insert(fields(json!({ "name": "Bo" }))).unwrap();

    assert_eq!(second.id().as_deref(), Some("2"));
    assert_eq!(store.load_all().len(), 2);
}
