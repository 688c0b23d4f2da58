//! Repository layer over the in-memory record store

pub mod books;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Book;

/// Ordered book collection plus the next identifier to hand out.
///
/// Identifiers come from a monotonic counter, so a deleted id is never reused.
#[derive(Debug)]
pub struct BookShelf {
    books: Vec<Book>,
    next_id: i64,
}

impl BookShelf {
    pub fn new(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self { books, next_id }
    }

    /// Shelf holding the two sample books
    pub fn seeded() -> Self {
        Self::new(vec![
            Book {
                id: 1,
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
            },
            Book {
                id: 2,
                title: "The Great Gatsby".to_string(),
                author: "F. Scott Fitzgerald".to_string(),
            },
        ])
    }
}

/// Main repository struct; clones share the same store
#[derive(Clone)]
pub struct Repository {
    shelf: Arc<RwLock<BookShelf>>,
}

impl Repository {
    pub fn new(shelf: BookShelf) -> Self {
        Self {
            shelf: Arc::new(RwLock::new(shelf)),
        }
    }
}
