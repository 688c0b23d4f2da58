//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::Book,
};

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

impl Repository {
    /// List all books in insertion order
    pub async fn books_list(&self) -> Vec<Book> {
        self.shelf.read().await.books.clone()
    }

    pub async fn books_count(&self) -> usize {
        self.shelf.read().await.books.len()
    }

    /// Get book by ID
    pub async fn books_get_by_id(&self, id: i64) -> AppResult<Book> {
        self.shelf
            .read()
            .await
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Append a new book with the next identifier
    pub async fn books_create(&self, title: String, author: String) -> Book {
        let mut shelf = self.shelf.write().await;
        let book = Book {
            id: shelf.next_id,
            title,
            author,
        };
        shelf.next_id += 1;
        shelf.books.push(book.clone());
        book
    }

    /// Overwrite title and author in place; the identifier never changes
    pub async fn books_update(&self, id: i64, title: String, author: String) -> AppResult<Book> {
        let mut shelf = self.shelf.write().await;
        let book = shelf
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        book.title = title;
        book.author = author;
        Ok(book.clone())
    }

    /// Remove a book, keeping the order of the remaining ones
    pub async fn books_delete(&self, id: i64) -> AppResult<()> {
        let mut shelf = self.shelf.write().await;
        let index = shelf
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        shelf.books.remove(index);
        Ok(())
    }
}
