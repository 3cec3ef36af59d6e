//! The file-backed library store.
//!
//! The store owns the in-memory sequence of books for the process lifetime.
//! It is loaded once at startup and the full sequence is re-serialized to
//! the backing file after every mutation, so the file and memory never
//! diverge once an operation returns.
//!
//! The backing file is a pretty-printed JSON array of book objects, kept
//! human-readable so it can be inspected and edited between runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::book::Book;
use crate::error::Result;

/// Reading statistics over the library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Total number of books
    pub total: usize,

    /// Number of books marked as read
    pub read: usize,

    /// Read books as a percentage of the total, 0.0 for an empty library
    pub read_percentage: f64,
}

/// The library store: an ordered sequence of books plus its backing file.
#[derive(Debug)]
pub struct LibraryStore {
    path: PathBuf,
    books: Vec<Book>,
}

impl LibraryStore {
    /// Open the store at `path`, loading any previously persisted books.
    ///
    /// A missing file and a file whose contents do not deserialize as a
    /// book list are both treated as an empty library. This is the
    /// recovery policy, not an error. Other I/O failures (for example
    /// permission denied) do propagate.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let books = load_books(&path)?;
        Ok(Self { path, books })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a book to the end of the sequence and persist.
    ///
    /// No de-duplication: a title identical to an existing one produces
    /// two independent entries.
    pub fn add(&mut self, book: Book) -> Result<()> {
        self.books.push(book);
        self.save()
    }

    /// Remove every book whose title matches `title` case-insensitively
    /// (exact comparison, not substring), then persist.
    ///
    /// Returns the number of books removed. Zero matches is not an error;
    /// the sequence is simply unchanged.
    pub fn remove(&mut self, title: &str) -> Result<usize> {
        let before = self.books.len();
        self.books.retain(|book| !book.title_matches(title));
        let removed = before - self.books.len();
        self.save()?;
        Ok(removed)
    }

    /// Books whose title or author contains `keyword` as a
    /// case-insensitive substring, in insertion order.
    ///
    /// An empty keyword matches every book.
    pub fn search(&self, keyword: &str) -> Vec<&Book> {
        let needle = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The full sequence in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Totals and read percentage over the current sequence.
    pub fn statistics(&self) -> Statistics {
        let total = self.books.len();
        let read = self.books.iter().filter(|book| book.read).count();
        let read_percentage = if total == 0 {
            0.0
        } else {
            read as f64 / total as f64 * 100.0
        };
        Statistics {
            total,
            read,
            read_percentage,
        }
    }

    /// Serialize the full sequence to the backing file, overwriting
    /// prior contents.
    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.books)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Load the book list from `path`.
///
/// Missing file or undeserializable contents yield an empty list.
fn load_books(path: &Path) -> Result<Vec<Book>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&raw).unwrap_or_default())
}
