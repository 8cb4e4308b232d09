//! Repository layer for book persistence

pub mod books;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::CatalogConfig,
    error::AppResult,
    models::book::{Book, CreateBook},
};

/// Storage contract for book records.
///
/// The store owns the canonical collection and assigns ids; it enforces no
/// business rules. Alternate backends implement this trait without any change
/// to the service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All records in insertion order
    async fn list_all(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, id: i32) -> AppResult<Option<Book>>;

    /// Assign the next id, append, and return the stored record
    async fn insert(&self, data: CreateBook) -> AppResult<Book>;

    /// Overwrite the record with the same id. Missing ids are ignored.
    async fn replace(&self, book: Book) -> AppResult<()>;

    /// Returns whether a record was removed
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Exact-match lookup over current records
    async fn isbn_exists(&self, isbn: &str) -> AppResult<bool>;
}

/// Main repository struct holding the active storage backends
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// Build the in-memory backend, seeded with the demo catalog when configured
    pub fn in_memory(config: &CatalogConfig) -> Self {
        let store = if config.seed_demo_data {
            books::InMemoryBookRepository::with_books(
                seed::demo_books(config.starting_id),
                config.starting_id,
            )
        } else {
            books::InMemoryBookRepository::new(config.starting_id)
        };
        Self::new(Arc::new(store))
    }
}
