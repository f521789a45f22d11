use notesapp::error::{Corruption, NotesError};
use notesapp::model::Note;
use notesapp::store::backend::StorageBackend;
use notesapp::store::fs::FileStore;
use notesapp::store::fs_backend::FsBackend;
use notesapp::store::DataStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("db.json"));
    (dir, backend)
}

fn note(id: &str, title: &str, text: &str) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        text: text.to_string(),
    }
}

fn assert_no_tmp_files(dir: &Path) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, backend) = setup();
    assert!(backend.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load() {
    let (_dir, backend) = setup();
    let notes = vec![note("1", "A", "hello"), note("2", "B", "")];

    backend.save(&notes).unwrap();
    assert_eq!(backend.load().unwrap(), notes);
}

#[test]
fn test_resave_of_loaded_collection_is_byte_identical() {
    let (_dir, backend) = setup();
    backend
        .save(&[note("1", "A", "a"), note("2", "B", "b\nwith newline")])
        .unwrap();
    let before = fs::read(backend.path()).unwrap();

    let loaded = backend.load().unwrap();
    backend.save(&loaded).unwrap();

    let after = fs::read(backend.path()).unwrap();
    assert_eq!(before, after);
    assert_eq!(backend.load().unwrap(), loaded);
}

#[test]
fn test_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.save(&[note("1", "Atomic", "")]).unwrap();
    backend.save(&[note("1", "Atomic", ""), note("2", "Again", "")]).unwrap();

    assert!(backend.path().exists());
    assert_no_tmp_files(dir.path());
}

#[test]
fn test_on_disk_format_is_pretty_json_array() {
    let (_dir, backend) = setup();
    backend.save(&[note("abc", "T", "body")]).unwrap();

    let on_disk = fs::read_to_string(backend.path()).unwrap();
    assert!(on_disk.starts_with("[\n  {"));
    let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    let obj = value[0].as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["id"], "abc");
    assert_eq!(obj["title"], "T");
    assert_eq!(obj["text"], "body");
}

#[test]
fn test_legacy_file_with_extra_fields_loads() {
    let (_dir, backend) = setup();
    // Field order and extras as older deployments wrote them
    fs::write(
        backend.path(),
        r#"[
  {
    "title": "Test Title",
    "text": "Test text",
    "id": "5b0f7b4c-3e0c-4f0e-9c6a-1f2d3e4a5b6c",
    "pinned": true
  }
]"#,
    )
    .unwrap();

    let loaded = backend.load().unwrap();
    assert_eq!(
        loaded,
        vec![note(
            "5b0f7b4c-3e0c-4f0e-9c6a-1f2d3e4a5b6c",
            "Test Title",
            "Test text"
        )]
    );
}

#[test]
fn test_legacy_scalar_fields_load_as_text() {
    let (_dir, backend) = setup();
    fs::write(
        backend.path(),
        r#"[{"title": 2024, "text": null, "id": "a1"}]"#,
    )
    .unwrap();

    assert_eq!(backend.load().unwrap(), vec![note("a1", "2024", "")]);
}

#[test]
fn test_legacy_seed_without_ids_is_corrupt() {
    let (_dir, backend) = setup();
    fs::write(
        backend.path(),
        r#"[{"title": "Test Title", "text": "Test text"}]"#,
    )
    .unwrap();

    assert!(matches!(
        backend.load(),
        Err(NotesError::CorruptStore {
            source: Corruption::Decode(_),
            ..
        })
    ));
}

#[test]
fn test_empty_file_loads_empty() {
    let (_dir, backend) = setup();
    fs::write(backend.path(), "").unwrap();
    assert!(backend.load().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_reported() {
    let (_dir, backend) = setup();
    fs::write(backend.path(), "[{\"id\": \"1\", \"title\": ").unwrap();

    match backend.load() {
        Err(NotesError::CorruptStore { path, .. }) => assert_eq!(path.as_path(), backend.path()),
        other => panic!("Expected CorruptStore, got {:?}", other),
    }
}

#[test]
fn test_file_breaking_id_invariants_is_corrupt() {
    let (_dir, backend) = setup();

    fs::write(
        backend.path(),
        r#"[{"id": "", "title": "blank", "text": ""}]"#,
    )
    .unwrap();
    assert!(matches!(
        backend.load(),
        Err(NotesError::CorruptStore {
            source: Corruption::EmptyId { index: 0 },
            ..
        })
    ));

    fs::write(
        backend.path(),
        r#"[{"id": "x", "title": "one", "text": ""}, {"id": "x", "title": "two", "text": ""}]"#,
    )
    .unwrap();
    assert!(matches!(
        backend.load(),
        Err(NotesError::CorruptStore {
            source: Corruption::DuplicateId(_),
            ..
        })
    ));
}

#[test]
fn test_store_refuses_to_delete_from_shared_id_file() {
    let (_dir, backend) = setup();
    let content = r#"[
  {"id": "", "title": "blank", "text": ""},
  {"id": "x", "title": "one", "text": ""},
  {"id": "x", "title": "two", "text": ""}
]"#;
    fs::write(backend.path(), content).unwrap();
    let store = FileStore::new(backend.path());

    assert!(matches!(
        store.list_notes(),
        Err(NotesError::CorruptStore { .. })
    ));
    assert!(matches!(
        store.delete_note("x"),
        Err(NotesError::CorruptStore { .. })
    ));
    // Both notes sharing the id are still on disk
    assert_eq!(fs::read_to_string(backend.path()).unwrap(), content);
}

#[test]
fn test_unreadable_path_is_storage_unavailable() {
    let (dir, _) = setup();
    // A directory where the file should be
    let path = dir.path().join("db.json");
    fs::create_dir(&path).unwrap();
    let backend = FsBackend::new(&path);

    assert!(matches!(
        backend.load(),
        Err(NotesError::StorageUnavailable { .. })
    ));
    assert!(matches!(
        backend.save(&[note("1", "", "")]),
        Err(NotesError::StorageUnavailable { .. })
    ));
    assert_no_tmp_files(dir.path());
}

#[test]
fn test_parent_that_is_a_file_is_storage_unavailable() {
    let (dir, _) = setup();
    let blocker = dir.path().join("db");
    fs::write(&blocker, "not a directory").unwrap();
    let backend = FsBackend::new(blocker.join("db.json"));

    let err = backend.save(&[note("1", "", "")]).unwrap_err();
    assert!(matches!(err, NotesError::StorageUnavailable { .. }));
}

#[test]
fn test_save_creates_missing_directories() {
    let (dir, _) = setup();
    let backend = FsBackend::new(dir.path().join("nested").join("deeper").join("db.json"));

    backend.save(&[note("1", "A", "")]).unwrap();
    assert_eq!(backend.load().unwrap().len(), 1);
}

#[test]
fn test_failed_rename_cleans_up_tmp_file() {
    let (dir, backend) = setup();
    backend.save(&[note("1", "kept", "")]).unwrap();

    // Make the rename fail: the target becomes a non-empty directory
    let path = backend.path().to_path_buf();
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();
    fs::write(path.join("occupant"), "x").unwrap();

    assert!(backend.save(&[note("2", "lost", "")]).is_err());
    assert_no_tmp_files(dir.path());
}

#[test]
fn test_location_is_the_file_path() {
    let (dir, backend) = setup();
    assert_eq!(
        backend.location(),
        dir.path().join("db.json").display().to_string()
    );
}
