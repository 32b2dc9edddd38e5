//! Persisted row types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A labeled grouping of questions (e.g. "Science").
///
/// Immutable through the API: no route creates, updates, or deletes one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    /// Display label; stored and serialized under the column name `type`.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// A trivia item.
///
/// Every non-id field is nullable: creation performs no required-ness
/// validation, so absent fields are stored as NULL. `category` is a loose
/// reference to `Category::id` and is never enforced referentially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// Field set for inserting a new question.
#[derive(Debug, Clone, Default)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}
