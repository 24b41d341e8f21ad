use desktop_tauri::entries::{
    apply_save_file, apply_updated_entry, dropdown_options, ScopedEntryStore, StoreScope,
    FILE_SAVED_MESSAGE,
};
use platform_host::EntryPayload;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("{prefix}_{}_{}", process::id(), nanos));
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

#[test]
fn updated_entry_persists_and_echoes_value() {
    let root = temp_dir("entries_updated_entry");
    let store = ScopedEntryStore::from_root(&root, StoreScope::Entries).expect("init store");

    let stored = apply_updated_entry(&store, &EntryPayload::new("k1", "v1")).expect("commit k1");
    assert_eq!(stored, "v1");
    apply_updated_entry(&store, &EntryPayload::new("k1", "v2")).expect("overwrite k1");
    apply_updated_entry(&store, &EntryPayload::new("k0", "v0")).expect("commit k0");

    let reopened = ScopedEntryStore::from_root(&root, StoreScope::Entries).expect("reopen");
    assert_eq!(reopened.load("k1").expect("load k1"), Some("v2".to_string()));
    assert_eq!(
        reopened.entries().expect("list entries"),
        vec![
            ("k0".to_string(), "v0".to_string()),
            ("k1".to_string(), "v2".to_string())
        ]
    );

    let _ = fs::remove_dir_all(root);
}

#[test]
fn updated_entry_rejects_empty_key_without_writing() {
    let root = temp_dir("entries_empty_key");
    let store = ScopedEntryStore::from_root(&root, StoreScope::Entries).expect("init store");

    let err = apply_updated_entry(&store, &EntryPayload::new("", "v")).expect_err("empty key");
    assert_eq!(err, "Entry key must not be empty");
    assert!(store.entries().expect("list entries").is_empty());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn save_file_confirms_and_stores_in_file_scope() {
    let root = temp_dir("entries_save_file");
    let files = ScopedEntryStore::from_root(&root, StoreScope::Files).expect("init files");

    let message =
        apply_save_file(&files, &EntryPayload::new("notes.txt", "hello")).expect("save file");
    assert_eq!(message, FILE_SAVED_MESSAGE);
    assert_eq!(files.load("notes.txt").expect("load"), Some("hello".to_string()));

    let entries = ScopedEntryStore::from_root(&root, StoreScope::Entries).expect("init entries");
    assert!(entries.entries().expect("list entries").is_empty());

    let _ = fs::remove_dir_all(root);
}

#[test]
fn dropdown_options_list_five_backends() {
    let options = dropdown_options();
    let values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();
    assert_eq!(
        values,
        ["backend1", "backend2", "backend3", "backend4", "backend5"]
    );
    assert_eq!(options[4].label, "Backend Option Neil");
}
