//! The book record.
//!
//! Books carry no unique identifier; the title acts as a case-insensitive
//! de-facto key for removal. Duplicate titles are permitted and produce
//! independent entries.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// A single book entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Publication year
    pub year: i32,

    /// Genre label (free text)
    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Case-insensitive exact title comparison (not substring).
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// Parse a publication year from free-text input.
///
/// Surrounding whitespace is trimmed. A value that does not parse as an
/// integer is an input error; no record may be constructed from it.
pub fn parse_year(input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| ShelfError::InvalidInput(format!("not a valid year: {:?}", input.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_trims_whitespace() {
        assert_eq!(parse_year(" 1965 ").unwrap(), 1965);
    }

    #[test]
    fn test_parse_year_accepts_negative() {
        // No range validation beyond integer coercion.
        assert_eq!(parse_year("-800").unwrap(), -800);
    }

    #[test]
    fn test_parse_year_rejects_non_numeric() {
        assert!(matches!(
            parse_year("nineteen sixty-five"),
            Err(ShelfError::InvalidInput(_))
        ));
        assert!(parse_year("").is_err());
    }

    #[test]
    fn test_title_matches_is_case_insensitive_and_exact() {
        let book = Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true);
        assert!(book.title_matches("DUNE"));
        assert!(book.title_matches("dune"));
        assert!(!book.title_matches("Dun"));
        assert!(!book.title_matches("Dune Messiah"));
    }
}
