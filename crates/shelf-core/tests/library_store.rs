use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use shelf_core::{Book, LibraryStore};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.json", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn dune() -> Book {
    Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true)
}

#[test]
fn test_open_missing_file_yields_empty_store() {
    let temp = TempFile::new("shelf_missing");

    let store = LibraryStore::open(&temp.path).expect("open should succeed");
    assert!(store.books().is_empty());
    // Opening alone must not create the file.
    assert!(!temp.path.exists());
}

#[test]
fn test_open_malformed_file_yields_empty_store() {
    let temp = TempFile::new("shelf_malformed");
    fs::write(&temp.path, "{ not json ]").expect("write should succeed");

    let store = LibraryStore::open(&temp.path).expect("open should succeed");
    assert!(store.books().is_empty());
}

#[test]
fn test_persist_and_reload_round_trip() {
    let temp = TempFile::new("shelf_round_trip");

    let mut store = LibraryStore::open(&temp.path).expect("open should succeed");
    store.add(dune()).expect("add should succeed");
    store
        .add(Book::new("Emma", "Jane Austen", 1815, "Classic", false))
        .expect("add should succeed");

    let reloaded = LibraryStore::open(&temp.path).expect("reopen should succeed");
    assert_eq!(reloaded.books(), store.books());
}

#[test]
fn test_persisted_file_is_indented_json_array() {
    let temp = TempFile::new("shelf_format");

    let mut store = LibraryStore::open(&temp.path).expect("open should succeed");
    store.add(dune()).expect("add should succeed");

    let on_disk = fs::read_to_string(&temp.path).expect("read should succeed");
    assert!(on_disk.starts_with('['));
    assert!(on_disk.contains("\n  "));
    assert!(on_disk.contains("\"title\": \"Dune\""));

    // The file stays manually editable: a hand-written list loads back.
    fs::write(
        &temp.path,
        r#"[
  {
    "title": "Hyperion",
    "author": "Dan Simmons",
    "year": 1989,
    "genre": "Sci-Fi",
    "read": false
  }
]"#,
    )
    .expect("write should succeed");
    let edited = LibraryStore::open(&temp.path).expect("reopen should succeed");
    assert_eq!(edited.books().len(), 1);
    assert_eq!(edited.books()[0].title, "Hyperion");
}

#[test]
fn test_remove_persists_even_when_nothing_matched() {
    let temp = TempFile::new("shelf_remove_persists");

    let mut store = LibraryStore::open(&temp.path).expect("open should succeed");
    store.add(dune()).expect("add should succeed");
    store.remove("No Such Title").expect("remove should succeed");

    let reloaded = LibraryStore::open(&temp.path).expect("reopen should succeed");
    assert_eq!(reloaded.books().len(), 1);
}

#[test]
fn test_remove_covers_case_variant_titles() {
    let temp = TempFile::new("shelf_remove_variants");

    let mut store = LibraryStore::open(&temp.path).expect("open should succeed");
    store.add(dune()).expect("add should succeed");
    store
        .add(Book::new("DUNE", "Frank Herbert", 1965, "Sci-Fi", false))
        .expect("add should succeed");

    let removed = store.remove("Dune").expect("remove should succeed");
    assert_eq!(removed, 2);

    let reloaded = LibraryStore::open(&temp.path).expect("reopen should succeed");
    assert!(reloaded.books().is_empty());
}

#[test]
fn test_first_read_book_scenario() {
    let temp = TempFile::new("shelf_scenario");

    let mut store = LibraryStore::open(&temp.path).expect("open should succeed");
    store.add(dune()).expect("add should succeed");

    let stats = store.statistics();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.read, 1);
    assert_eq!(stats.read_percentage, 100.0);
}
