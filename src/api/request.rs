//! # Request Schemas
//!
//! Bodies are deserialized into explicit schemas rather than read field by
//! field; absent fields stay `None` instead of silently defaulting.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::errors::ApiError;

/// Body schema for `POST /questions`, covering both modes: a non-empty
/// `searchTerm` selects search mode, anything else creates a question from
/// the four optional fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

impl QuestionPayload {
    /// The search term when present and non-empty; an empty string selects
    /// create mode.
    pub fn search(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

/// Body schema for `POST /quizzes`.
///
/// Both fields stay loosely typed: shape problems inside them report as
/// unprocessable, not bad request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizPayload {
    #[serde(default)]
    pub previous_questions: Option<Value>,
    #[serde(default)]
    pub quiz_category: Option<Value>,
}

/// Parse a JSON request body into a schema; a body that is not valid JSON
/// for the schema is a bad request.
pub fn parse_body<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|_| ApiError::BadRequest)
}

/// The 1-based page number from the query string; missing or non-numeric
/// values fall back to page 1.
pub fn requested_page(query: &HashMap<String, String>) -> i64 {
    query.get("page").and_then(|raw| raw.parse().ok()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_stay_none() {
        let payload: QuestionPayload = parse_body(b"{}").unwrap();

        assert!(payload.search_term.is_none());
        assert!(payload.question.is_none());
        assert!(payload.answer.is_none());
        assert!(payload.difficulty.is_none());
        assert!(payload.category.is_none());
    }

    #[test]
    fn test_empty_search_term_selects_create_mode() {
        let payload: QuestionPayload =
            parse_body(json!({"searchTerm": ""}).to_string().as_bytes()).unwrap();

        assert!(payload.search().is_none());
    }

    #[test]
    fn test_search_term_round_trips() {
        let payload: QuestionPayload =
            parse_body(json!({"searchTerm": "title"}).to_string().as_bytes()).unwrap();

        assert_eq!(payload.search(), Some("title"));
    }

    #[test]
    fn test_invalid_json_is_bad_request() {
        let result: Result<QuestionPayload, ApiError> = parse_body(b"not json");
        assert_eq!(result.unwrap_err(), ApiError::BadRequest);
    }

    #[test]
    fn test_mistyped_field_is_bad_request() {
        let result: Result<QuestionPayload, ApiError> =
            parse_body(json!({"difficulty": "hard"}).to_string().as_bytes());
        assert_eq!(result.unwrap_err(), ApiError::BadRequest);
    }

    #[test]
    fn test_quiz_payload_keeps_fields_loose() {
        let payload: QuizPayload = parse_body(
            json!({"previous_questions": "oops", "quiz_category": 3})
                .to_string()
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(payload.previous_questions, Some(json!("oops")));
        assert_eq!(payload.quiz_category, Some(json!(3)));
    }

    #[test]
    fn test_requested_page_defaults_to_one() {
        assert_eq!(requested_page(&HashMap::new()), 1);
    }

    #[test]
    fn test_requested_page_parses_number() {
        let query = HashMap::from([("page".to_string(), "3".to_string())]);
        assert_eq!(requested_page(&query), 3);
    }

    #[test]
    fn test_requested_page_falls_back_on_garbage() {
        let query = HashMap::from([("page".to_string(), "abc".to_string())]);
        assert_eq!(requested_page(&query), 1);
    }
}
