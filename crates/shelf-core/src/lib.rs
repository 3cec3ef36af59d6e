//! # Shelf Core
//!
//! Core library for Shelf - a personal library manager for the terminal.
//!
//! This crate provides the data model and the file-backed store,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **book**: The book record and year parsing
//! - **store**: The file-backed library store (load, save, queries)
//! - **error**: Error types shared by core operations

pub mod book;
pub mod error;
pub mod store;

pub use book::{parse_year, Book};
pub use error::{Result, ShelfError};
pub use store::{LibraryStore, Statistics};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
