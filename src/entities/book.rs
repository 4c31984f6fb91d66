// 📚 Book Entity - Registry-backed construction
//
// The one entity in the catalog whose shared attribute is a registry:
// every successfully constructed Book is appended to the type-wide
// library exactly once, in construction order, before `new` returns.
// Failed construction registers nothing.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::shared::Registry;

use super::{ConstructResult, InvalidAttribute};

lazy_static! {
    /// Shared library of every Book ever constructed (append-only)
    static ref LIBRARY: Registry<Book> = Registry::new();
}

// ============================================================================
// BOOK ENTITY
// ============================================================================

/// A book in the shared library.
///
/// Instance attributes are fixed at construction; `id` gives each
/// registered book a stable identity independent of its title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Stable identity - assigned at construction, never changes
    pub id: String,

    /// Title (required, non-blank)
    pub title: String,

    /// Author (required, non-blank)
    pub author: String,

    /// Publication year (defaults when omitted)
    pub year: i32,
}

impl Book {
    /// Default publication year applied when none is supplied
    pub const DEFAULT_YEAR: i32 = 2020;

    /// Create a new book and register it in the shared library.
    ///
    /// `title` and `author` are required and must be non-blank; `year`
    /// falls back to [`Book::DEFAULT_YEAR`] when omitted. On error
    /// nothing is appended to the library.
    pub fn new(title: &str, author: &str, year: Option<i32>) -> ConstructResult<Book> {
        if title.trim().is_empty() {
            return Err(InvalidAttribute::missing("Book", "title"));
        }
        if author.trim().is_empty() {
            return Err(InvalidAttribute::missing("Book", "author"));
        }

        let book = Book {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year: year.unwrap_or(Self::DEFAULT_YEAR),
        };

        LIBRARY.register(book.clone());
        Ok(book)
    }

    /// Instance query: human-readable description of this book
    ///
    /// Example: `'1984' by George Orwell (1949)`
    pub fn description(&self) -> String {
        format!("'{}' by {} ({})", self.title, self.author, self.year)
    }

    /// Type-level query: how many books have been constructed so far
    pub fn total_books() -> usize {
        LIBRARY.count()
    }

    /// Type-level query: snapshot of the library in construction order
    pub fn library() -> Vec<Book> {
        LIBRARY.all()
    }

    /// Type-level query: first book with a matching title (exact,
    /// case-insensitive)
    pub fn find_by_title(title: &str) -> Option<Book> {
        let lower_title = title.to_lowercase();
        LIBRARY.find(|book| book.title.to_lowercase() == lower_title)
    }

    /// Construction-order index of a book in the library, by id
    pub fn library_position(id: &str) -> Option<usize> {
        LIBRARY.position(|book| book.id == id)
    }

    /// Utility: a book is a classic if published before 1970
    pub fn is_classic(year: i32) -> bool {
        year < 1970
    }
}

// ============================================================================
// TESTS
// ============================================================================
