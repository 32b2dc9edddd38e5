//! # Persistence Seam
//!
//! The `Store` trait captures everything the HTTP layer asks of the
//! relational store: ordered full-table fetches, equality and substring
//! filters, fetch-by-id, insert, delete, and counts. `SqliteStore` is the
//! production backend; `MemoryStore` backs the router tests.

pub mod memory;
pub mod models;
pub mod sqlite;

pub use memory::MemoryStore;
pub use models::{Category, NewQuestion, Question};
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend failure outside the database driver
    #[error("{0}")]
    Backend(String),
}

/// Query and mutation capability over categories and questions
#[async_trait]
pub trait Store: Send + Sync {
    /// All categories in ascending id order
    async fn categories_ordered(&self) -> StoreResult<Vec<Category>>;

    /// Category by primary key
    async fn category_by_id(&self, id: i64) -> StoreResult<Option<Category>>;

    /// Count of every category row
    async fn count_categories(&self) -> StoreResult<usize>;

    /// All questions in ascending id order
    async fn questions_ordered(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose category field equals `category`, in ascending id order
    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term` case-insensitively, in ascending id order
    async fn questions_matching(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Question by primary key
    async fn question_by_id(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Insert a new question, returning the stored row
    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Delete a question by primary key
    async fn delete_question(&self, id: i64) -> StoreResult<()>;

    /// Count of every question row
    async fn count_questions(&self) -> StoreResult<usize>;
}
