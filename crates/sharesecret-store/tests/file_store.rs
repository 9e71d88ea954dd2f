//! # File-Backed Store Integration Tests
//!
//! Exercises `SecretStore` over a real backing file: persistence across
//! restarts, sharing one file between store instances, and exclusivity of
//! concurrent reads.

use std::fs;
use std::sync::Arc;

use sharesecret_core::{BackendError, SecretDigest, StoreError};
use sharesecret_store::{Backend, FileBackend, SecretStore};

fn scratch() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("secrets.json");
    (dir, path)
}

#[test]
fn secret_survives_restart() {
    let (_dir, path) = scratch();

    let id = {
        let store = SecretStore::open_file(&path).unwrap();
        store.add("survives").unwrap()
    };

    let reopened = SecretStore::open_file(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get(id.as_str()).unwrap(), "survives");
    assert!(reopened.get(id.as_str()).unwrap_err().is_not_found());
}

#[test]
fn burn_survives_restart() {
    let (_dir, path) = scratch();

    let id = {
        let store = SecretStore::open_file(&path).unwrap();
        let id = store.add("read me once").unwrap();
        store.get(id.as_str()).unwrap();
        id
    };

    let reopened = SecretStore::open_file(&path).unwrap();
    assert!(reopened.is_empty());
    assert!(reopened.get(id.as_str()).unwrap_err().is_not_found());
}

#[test]
fn file_matches_memory_after_each_mutation() {
    let (_dir, path) = scratch();
    let store = SecretStore::open_file(&path).unwrap();
    let backend = FileBackend::open(&path).unwrap();

    let a = store.add("alpha").unwrap();
    let b = store.add("beta").unwrap();
    let on_disk = backend.load().unwrap();
    assert_eq!(on_disk.len(), 2);
    assert_eq!(on_disk[a.as_str()], "alpha");

    store.get(b.as_str()).unwrap();
    let on_disk = backend.load().unwrap();
    assert_eq!(on_disk.len(), 1);
    assert!(!on_disk.contains_key(b.as_str()));
}

#[test]
fn stores_sharing_a_file_see_each_other() {
    let (_dir, path) = scratch();
    let writer = SecretStore::open_file(&path).unwrap();
    let reader = SecretStore::open_file(&path).unwrap();

    let id = writer.add("shared").unwrap();
    assert_eq!(reader.get(id.as_str()).unwrap(), "shared");
    assert!(writer.get(id.as_str()).unwrap_err().is_not_found());
}

#[test]
fn add_does_not_clobber_records_from_another_store() {
    let (_dir, path) = scratch();
    let first = SecretStore::open_file(&path).unwrap();
    let second = SecretStore::open_file(&path).unwrap();

    let a = first.add("from first").unwrap();
    let b = second.add("from second").unwrap();

    assert_eq!(first.get(b.as_str()).unwrap(), "from second");
    assert_eq!(second.get(a.as_str()).unwrap(), "from first");
}

#[test]
fn reads_existing_image_written_by_hand() {
    let (_dir, path) = scratch();
    fs::write(
        &path,
        "{\"5d41402abc4b2a76b9719d911017c592\":\"hello\"}\n",
    )
    .unwrap();

    let store = SecretStore::open_file(&path).unwrap();
    assert_eq!(
        store.get("5d41402abc4b2a76b9719d911017c592").unwrap(),
        "hello"
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
}

#[test]
fn corrupted_file_fails_get_with_decode_error() {
    let (_dir, path) = scratch();
    let store = SecretStore::open_file(&path).unwrap();
    let id = store.add("before corruption").unwrap();

    fs::write(&path, "{\"truncated").unwrap();
    let err = store.get(id.as_str()).unwrap_err();
    assert!(matches!(err, StoreError::Backend(BackendError::Decode(_))));
}

#[test]
fn deleted_file_fails_get_with_io_error() {
    let (_dir, path) = scratch();
    let store = SecretStore::open_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let err = store.get(SecretDigest::of("x").as_str()).unwrap_err();
    assert!(matches!(err, StoreError::Backend(BackendError::Io(_))));
}

#[test]
fn concurrent_gets_on_file_store_reveal_once() {
    let (_dir, path) = scratch();
    let store = Arc::new(SecretStore::open_file(&path).unwrap());
    let id = store.add("contended").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = id.clone();
            std::thread::spawn(move || store.get(id.as_str()))
        })
        .collect();

    let mut successes = 0;
    let mut not_found = 0;
    for handle in handles {
        match handle.join().unwrap() {
            Ok(plaintext) => {
                assert_eq!(plaintext, "contended");
                successes += 1;
            }
            Err(e) if e.is_not_found() => not_found += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!(successes, 1);
    assert_eq!(not_found, 7);
}
