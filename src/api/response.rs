//! # Response Bodies
//!
//! Success envelopes for each route. Every body carries `success: true`;
//! failures use the error envelope in `errors`.

use serde::Serialize;

use crate::store::Question;

/// Category index
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListBody {
    pub success: bool,
    pub categories: Vec<String>,
    pub total_categories: usize,
}

impl CategoryListBody {
    pub fn new(categories: Vec<String>, total_categories: usize) -> Self {
        Self {
            success: true,
            categories,
            total_categories,
        }
    }
}

/// A page of the full question list, with the category index alongside
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPageBody {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Always serialized, always null on this route
    pub current_category: Option<String>,
    pub categories: Vec<String>,
}

impl QuestionPageBody {
    pub fn new(questions: Vec<Question>, total_questions: usize, categories: Vec<String>) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            current_category: None,
            categories,
        }
    }
}

/// Search results and per-category listings: a page of matches plus the
/// unpaginated match count
#[derive(Debug, Clone, Serialize)]
pub struct FilteredQuestionsBody {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

impl FilteredQuestionsBody {
    pub fn new(questions: Vec<Question>, total_questions: usize, current_category: String) -> Self {
        Self {
            success: true,
            questions,
            total_questions,
            current_category,
        }
    }
}

/// Acknowledgement for a created question; no other keys
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCreatedBody {
    pub success: bool,
}

impl QuestionCreatedBody {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for QuestionCreatedBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Acknowledgement for a deleted question
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDeletedBody {
    pub success: bool,
    pub deleted: i64,
    pub total_questions: usize,
}

impl QuestionDeletedBody {
    pub fn new(deleted: i64, total_questions: usize) -> Self {
        Self {
            success: true,
            deleted,
            total_questions,
        }
    }
}

/// Next quiz round
#[derive(Debug, Clone, Serialize)]
pub struct QuizBody {
    pub success: bool,
    pub question: QuizQuestion,
}

impl QuizBody {
    /// A page holding the picked question
    pub fn page(questions: Vec<Question>) -> Self {
        Self {
            success: true,
            question: QuizQuestion::Next(questions),
        }
    }

    /// Every candidate has been asked already
    pub fn exhausted() -> Self {
        Self {
            success: true,
            question: QuizQuestion::Exhausted(String::new()),
        }
    }
}

/// The next-question payload: a 1-element page, or the empty string once
/// every candidate has been asked (a string, not null).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuizQuestion {
    Exhausted(String),
    Next(Vec<Question>),
}
