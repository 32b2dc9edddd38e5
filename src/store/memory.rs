//! In-memory store.
//!
//! Backs the router tests; the production server uses `SqliteStore`.

use std::sync::RwLock;

use async_trait::async_trait;

use super::models::{Category, NewQuestion, Question};
use super::{Store, StoreError, StoreResult};

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_category_id: i64,
    next_question_id: i64,
}

/// In-memory store
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                categories: Vec::new(),
                questions: Vec::new(),
                next_category_id: 1,
                next_question_id: 1,
            }),
        }
    }

    /// Insert a category directly, returning its id.
    pub fn push_category(&self, kind: &str) -> i64 {
        let mut tables = self.tables.write().expect("store lock poisoned");
        let id = tables.next_category_id;
        tables.next_category_id += 1;
        tables.categories.push(Category {
            id,
            kind: kind.to_string(),
        });
        id
    }

    /// Insert a question directly, returning the stored row.
    pub fn push_question(&self, new: NewQuestion) -> Question {
        let mut tables = self.tables.write().expect("store lock poisoned");
        let id = tables.next_question_id;
        tables.next_question_id += 1;
        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        };
        tables.questions.push(question.clone());
        question
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn categories_ordered(&self) -> StoreResult<Vec<Category>> {
        let tables = self.read()?;
        let mut rows = tables.categories.clone();
        rows.sort_by_key(|c| c.id);
        Ok(rows)
    }

    async fn category_by_id(&self, id: i64) -> StoreResult<Option<Category>> {
        let tables = self.read()?;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn count_categories(&self) -> StoreResult<usize> {
        Ok(self.read()?.categories.len())
    }

    async fn questions_ordered(&self) -> StoreResult<Vec<Question>> {
        let tables = self.read()?;
        let mut rows = tables.questions.clone();
        rows.sort_by_key(|q| q.id);
        Ok(rows)
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        let tables = self.read()?;
        let mut rows: Vec<Question> = tables
            .questions
            .iter()
            .filter(|q| q.category == Some(category))
            .cloned()
            .collect();
        rows.sort_by_key(|q| q.id);
        Ok(rows)
    }

    async fn questions_matching(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.read()?;
        let mut rows: Vec<Question> = tables
            .questions
            .iter()
            .filter(|q| {
                q.question
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        rows.sort_by_key(|q| q.id);
        Ok(rows)
    }

    async fn question_by_id(&self, id: i64) -> StoreResult<Option<Question>> {
        let tables = self.read()?;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.write()?;
        let id = tables.next_question_id;
        tables.next_question_id += 1;
        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            difficulty: new.difficulty,
            category: new.category,
        };
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        let mut tables = self.write()?;
        tables.questions.retain(|q| q.id != id);
        Ok(())
    }

    async fn count_questions(&self) -> StoreResult<usize> {
        Ok(self.read()?.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: Some(text.to_string()),
            answer: Some("answer".to_string()),
            difficulty: Some(1),
            category: Some(category),
        }
    }

    #[tokio::test]
    async fn test_questions_ordered_by_id() {
        let store = MemoryStore::new();
        store.push_question(question("first", 1));
        store.push_question(question("second", 1));
        store.push_question(question("third", 2));

        let rows = store.questions_ordered().await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_matching_is_case_insensitive() {
        let store = MemoryStore::new();
        store.push_question(question("Whose autobiography is entitled 'Me'?", 1));
        store.push_question(question("What boxer's original name is Cassius Clay?", 2));

        let rows = store.questions_matching("ENTITLED").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }

    #[tokio::test]
    async fn test_matching_skips_null_text() {
        let store = MemoryStore::new();
        store.push_question(NewQuestion::default());

        let rows = store.questions_matching("anything").await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let store = MemoryStore::new();
        let stored = store.push_question(question("doomed", 1));

        store.delete_question(stored.id).await.unwrap();

        assert_eq!(store.count_questions().await.unwrap(), 0);
        assert!(store.question_by_id(stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_category_filter_matches_equality() {
        let store = MemoryStore::new();
        store.push_question(question("in one", 1));
        store.push_question(question("in two", 2));
        store.push_question(NewQuestion::default());

        let rows = store.questions_in_category(1).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, Some(1));
    }
}
