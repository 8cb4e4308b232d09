//! In-memory book store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookRepository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

struct Shelf {
    books: Vec<Book>,
    /// Only ever incremented, so deleted ids are not handed out again.
    /// `None` once `i32::MAX` has been assigned.
    next_id: Option<i32>,
}

/// Book store backed by a `Vec` behind an async lock
pub struct InMemoryBookRepository {
    shelf: RwLock<Shelf>,
}

impl InMemoryBookRepository {
    /// Empty store whose first id is `starting_id`
    pub fn new(starting_id: i32) -> Self {
        Self::with_books(Vec::new(), starting_id)
    }

    /// Store pre-loaded with `books`; ids continue after the highest one present
    pub fn with_books(books: Vec<Book>, starting_id: i32) -> Self {
        let next_id = books
            .iter()
            .map(|b| b.id)
            .max()
            .map_or(Some(starting_id), |max| max.checked_add(1));

        Self {
            shelf: RwLock::new(Shelf { books, next_id }),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new(1)
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.shelf.read().await.books.clone())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Book>> {
        let shelf = self.shelf.read().await;
        Ok(shelf.books.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, data: CreateBook) -> AppResult<Book> {
        let mut shelf = self.shelf.write().await;
        let id = shelf.next_id.ok_or(AppError::IdSpaceExhausted)?;
        shelf.next_id = id.checked_add(1);
        let book = Book::from_create(id, data);
        shelf.books.push(book.clone());
        Ok(book)
    }

    async fn replace(&self, book: Book) -> AppResult<()> {
        let mut shelf = self.shelf.write().await;
        if let Some(slot) = shelf.books.iter_mut().find(|b| b.id == book.id) {
            *slot = book;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut shelf = self.shelf.write().await;
        match shelf.books.iter().position(|b| b.id == id) {
            Some(index) => {
                shelf.books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn isbn_exists(&self, isbn: &str) -> AppResult<bool> {
        let shelf = self.shelf.read().await;
        Ok(shelf.books.iter().any(|b| b.isbn == isbn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i32, isbn: &str) -> Book {
        Book {
            id,
            title: format!("Book {}", id),
            author_id: 1,
            published_year: 2000,
            isbn: isbn.to_string(),
        }
    }

    fn create(title: &str, isbn: &str) -> CreateBook {
        CreateBook {
            title: title.to_string(),
            author_id: 3,
            published_year: 1949,
            isbn: isbn.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_into_empty_store_uses_starting_id() {
        let repo = InMemoryBookRepository::new(100);
        let first = repo.insert(create("1984", "A")).await.unwrap();
        let second = repo.insert(create("Dune", "B")).await.unwrap();
        assert_eq!(first.id, 100);
        assert_eq!(second.id, 101);
        assert_eq!(first.title, "1984");
    }

    #[tokio::test]
    async fn test_ids_continue_after_highest_initial_id() {
        let repo = InMemoryBookRepository::with_books(vec![book(2, "A"), book(7, "B")], 1);
        let created = repo.insert(create("Foundation", "C")).await.unwrap();
        assert_eq!(created.id, 8);
    }

    #[tokio::test]
    async fn test_deleted_max_id_is_not_reused() {
        let repo = InMemoryBookRepository::with_books(vec![book(1, "A"), book(2, "B")], 1);
        assert!(repo.delete(2).await.unwrap());
        let created = repo.insert(create("Neuromancer", "C")).await.unwrap();
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_insert_at_max_id_then_exhausted() {
        let repo = InMemoryBookRepository::new(i32::MAX);
        let last = repo.insert(create("Dune", "A")).await.unwrap();
        assert_eq!(last.id, i32::MAX);

        let err = repo.insert(create("Foundation", "B")).await.unwrap_err();
        assert!(matches!(err, AppError::IdSpaceExhausted));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_preloaded_max_id_does_not_overflow() {
        let repo = InMemoryBookRepository::with_books(vec![book(i32::MAX, "A")], 1);
        let err = repo.insert(create("Dune", "B")).await.unwrap_err();
        assert!(matches!(err, AppError::IdSpaceExhausted));
        assert_eq!(repo.list_all().await.unwrap(), vec![book(i32::MAX, "A")]);
    }

    #[tokio::test]
    async fn test_list_all_keeps_insertion_order() {
        let repo = InMemoryBookRepository::with_books(vec![book(5, "A"), book(1, "B")], 1);
        repo.insert(create("Gone Girl", "C")).await.unwrap();
        let ids: Vec<i32> = repo.list_all().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![5, 1, 6]);
    }

    #[tokio::test]
    async fn test_get() {
        let repo = InMemoryBookRepository::with_books(vec![book(1, "A")], 1);
        assert_eq!(repo.get(1).await.unwrap(), Some(book(1, "A")));
        assert_eq!(repo.get(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_overwrites_existing() {
        let repo = InMemoryBookRepository::with_books(vec![book(1, "A"), book(2, "B")], 1);
        let mut changed = book(2, "Z");
        changed.title = "Changed".to_string();
        repo.replace(changed.clone()).await.unwrap();
        assert_eq!(repo.get(2).await.unwrap(), Some(changed));
        assert_eq!(repo.get(1).await.unwrap(), Some(book(1, "A")));
    }

    #[tokio::test]
    async fn test_replace_missing_is_noop() {
        let repo = InMemoryBookRepository::with_books(vec![book(1, "A")], 1);
        repo.replace(book(9, "Z")).await.unwrap();
        assert_eq!(repo.list_all().await.unwrap(), vec![book(1, "A")]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryBookRepository::with_books(vec![book(1, "A"), book(2, "B")], 1);
        assert!(repo.delete(1).await.unwrap());
        assert_eq!(repo.get(1).await.unwrap(), None);
        assert!(!repo.delete(1).await.unwrap());
        assert_eq!(repo.list_all().await.unwrap(), vec![book(2, "B")]);
    }

    #[tokio::test]
    async fn test_isbn_exists_is_exact_match() {
        let repo = InMemoryBookRepository::with_books(vec![book(1, "978-0441172719")], 1);
        assert!(repo.isbn_exists("978-0441172719").await.unwrap());
        assert!(!repo.isbn_exists("9780441172719").await.unwrap());
        assert!(!repo.isbn_exists("").await.unwrap());
    }
}
