//! Catalog service over the book store

use crate::{
    error::AppResult,
    models::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Book> {
        self.repository.books_list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        self.repository.books_get_by_id(id).await
    }

    pub async fn create(&self, data: CreateBook) -> Book {
        let book = self.repository.books_create(data.title, data.author).await;
        tracing::debug!(id = book.id, "Book created");
        book
    }

    pub async fn update(&self, id: i64, data: UpdateBook) -> AppResult<Book> {
        self.repository.books_update(id, data.title, data.author).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::debug!(id, "Book deleted");
        Ok(())
    }
}
