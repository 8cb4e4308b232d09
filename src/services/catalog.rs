//! Catalog management service
//!
//! Enforces the catalog rules before any write reaches the store:
//! ISBNs are unique, and a published year never lies after the
//! current calendar year.

use std::sync::Arc;

use chrono::{Datelike, Local};
use tokio::sync::Mutex;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::{BookRepository, Repository},
};

#[derive(Clone)]
pub struct CatalogService {
    books: Arc<dyn BookRepository>,
    /// Serialises check-then-write sequences across concurrent requests
    write_lock: Arc<Mutex<()>>,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self {
            books: repository.books,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.books.list_all().await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Option<Book>> {
        self.books.get(id).await
    }

    /// Create a new book after validating ISBN uniqueness and year
    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        data.validate()?;
        let _guard = self.write_lock.lock().await;

        if self.books.isbn_exists(&data.isbn).await? {
            return Err(AppError::DuplicateIsbn(data.isbn));
        }
        check_year(data.published_year)?;

        let book = self.books.insert(data).await?;
        tracing::info!("Catalog create: book id={} isbn={:?}", book.id, book.isbn);
        Ok(book)
    }

    /// Replace the mutable fields of an existing book.
    /// Returns `None` when no book has this id.
    pub async fn update_book(&self, id: i32, data: UpdateBook) -> AppResult<Option<Book>> {
        data.validate()?;
        let _guard = self.write_lock.lock().await;

        let Some(mut book) = self.books.get(id).await? else {
            return Ok(None);
        };

        // Keeping the current ISBN is never a collision with itself
        if data.isbn != book.isbn && self.books.isbn_exists(&data.isbn).await? {
            return Err(AppError::DuplicateIsbn(data.isbn));
        }
        check_year(data.published_year)?;

        book.apply_update(data);
        self.books.replace(book.clone()).await?;
        tracing::info!("Catalog update: book id={}", book.id);
        Ok(Some(book))
    }

    /// Returns whether a book was removed
    pub async fn delete_book(&self, id: i32) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let removed = self.books.delete(id).await?;
        if removed {
            tracing::info!("Catalog delete: book id={}", id);
        }
        Ok(removed)
    }
}

fn check_year(published_year: i32) -> AppResult<()> {
    if published_year > Local::now().year() {
        return Err(AppError::InvalidYear(published_year));
    }
    Ok(())
}
