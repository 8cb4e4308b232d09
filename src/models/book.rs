//! Book (catalog record) model and request types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Catalog book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Store-assigned identifier, never changes after creation
    pub id: i32,
    pub title: String,
    /// Author reference (no author entity is modeled)
    pub author_id: i32,
    pub published_year: i32,
    pub isbn: String,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    pub author_id: i32,
    pub published_year: i32,
    #[serde(default)]
    #[validate(length(max = 32, message = "ISBN must be at most 32 characters"))]
    pub isbn: String,
}

/// Update book request. All mutable fields are replaced.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    pub author_id: i32,
    pub published_year: i32,
    #[serde(default)]
    #[validate(length(max = 32, message = "ISBN must be at most 32 characters"))]
    pub isbn: String,
}

impl Book {
    /// Build a record from a create request and an assigned id
    pub fn from_create(id: i32, data: CreateBook) -> Self {
        Self {
            id,
            title: data.title,
            author_id: data.author_id,
            published_year: data.published_year,
            isbn: data.isbn,
        }
    }

    /// Overwrite every mutable field, keeping the id
    pub fn apply_update(&mut self, data: UpdateBook) {
        self.title = data.title;
        self.author_id = data.author_id;
        self.published_year = data.published_year;
        self.isbn = data.isbn;
    }
}

/// Ordering applied to book listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    PublishedYear,
    /// Unrecognized key: keep store order
    Unsorted,
}

impl SortKey {
    /// Case-insensitive parse; anything unknown maps to `Unsorted`
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "title" => SortKey::Title,
            "publishedyear" | "published_year" | "published-year" => SortKey::PublishedYear,
            _ => SortKey::Unsorted,
        }
    }

    /// Stable in-place sort. Titles compare case-insensitively.
    pub fn sort(self, books: &mut [Book]) {
        match self {
            SortKey::Title => books.sort_by_cached_key(|b| b.title.to_lowercase()),
            SortKey::PublishedYear => books.sort_by_key(|b| b.published_year),
            SortKey::Unsorted => {}
        }
    }
}

/// Book list query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// `title` (default) or `published_year`, case-insensitive
    #[serde(alias = "sortBy")]
    pub sort_by: Option<String>,
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Books per page (default: 5)
    #[serde(alias = "pageSize")]
    pub page_size: Option<i64>,
}

impl BookQuery {
    pub fn sort_key(&self) -> SortKey {
        self.sort_by
            .as_deref()
            .map(SortKey::parse)
            .unwrap_or(SortKey::Title)
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// One page of a sorted book listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookPage {
    pub items: Vec<Book>,
    /// Number of books before pagination
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

impl BookPage {
    /// Sort then slice a full listing. A non-positive page size yields an empty page.
    pub fn build(mut books: Vec<Book>, sort: SortKey, page: i64, page_size: i64) -> Self {
        let total = books.len() as i64;
        sort.sort(&mut books);

        let items = if page_size <= 0 {
            Vec::new()
        } else {
            let skip = (page.max(1) - 1).saturating_mul(page_size);
            books
                .into_iter()
                .skip(usize::try_from(skip).unwrap_or(usize::MAX))
                .take(page_size as usize)
                .collect()
        };

        Self {
            items,
            total,
            page,
            page_size,
        }
    }
}
