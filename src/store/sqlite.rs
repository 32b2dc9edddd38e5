//! SQLite-backed store.
//!
//! Schema creation and category seeding live here as well; `init` runs
//! them once, `start` only verifies the schema exists.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::models::{Category, NewQuestion, Question};
use super::{Store, StoreResult};

/// Categories seeded by `init` into an empty database.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

const CREATE_CATEGORIES: &str = "\
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
)";

const CREATE_QUESTIONS: &str = "\
CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT,
    answer     TEXT,
    difficulty INTEGER,
    category   INTEGER
)";

/// SQLite-backed store
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `url` (e.g. `sqlite://trivia.db`), creating the database
    /// file if it does not exist yet.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Connect to a private in-memory database.
    ///
    /// Capped at one connection: the database lives inside that connection
    /// and would otherwise differ per pool member.
    pub async fn connect_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create the tables if they do not exist.
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(CREATE_CATEGORIES).execute(&self.pool).await?;
        sqlx::query(CREATE_QUESTIONS).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert the default categories when the table is empty.
    pub async fn seed_default_categories(&self) -> StoreResult<()> {
        let existing = self.count_categories().await?;
        if existing > 0 {
            return Ok(());
        }

        for kind in DEFAULT_CATEGORIES {
            sqlx::query("INSERT INTO categories (type) VALUES (?1)")
                .bind(kind)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    /// Whether the schema has been created in this database.
    pub async fn is_initialized(&self) -> StoreResult<bool> {
        let table: Option<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'categories'",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(table.is_some())
    }

    /// Close the connection pool, flushing outstanding work.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn categories_ordered(&self) -> StoreResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn category_by_id(&self, id: i64) -> StoreResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn count_categories(&self) -> StoreResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as usize)
    }

    async fn questions_ordered(&self) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions \
             WHERE category = ?1 ORDER BY id",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn questions_matching(&self, term: &str) -> StoreResult<Vec<Question>> {
        // LIKE wildcards inside the term stay live; the pattern is built
        // around the term verbatim.
        let rows = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions \
             WHERE lower(question) LIKE '%' || lower(?1) || '%' ORDER BY id",
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn question_by_id(&self, id: i64) -> StoreResult<Option<Question>> {
        let row = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let row = sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, difficulty, category) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING id, question, answer, difficulty, category",
        )
        .bind(new.question)
        .bind(new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count_questions(&self) -> StoreResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as usize)
    }
}
