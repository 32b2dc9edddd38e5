//! Question HTTP Routes
//!
//! Listing with pagination, search/create, and deletion.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::pagination::paginate;
use crate::api::request::{parse_body, requested_page, QuestionPayload};
use crate::api::response::{
    FilteredQuestionsBody, QuestionCreatedBody, QuestionDeletedBody, QuestionPageBody,
};
use crate::store::NewQuestion;

use super::server::ApiState;

/// Create question routes
pub fn question_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/questions", get(list_questions_handler))
        .route("/questions", post(create_or_search_handler))
        .route("/questions/{question_id}", delete(delete_question_handler))
        .with_state(state)
}

/// A page of the full question list, with the category index alongside.
async fn list_questions_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<QuestionPageBody>, ApiError> {
    let page = requested_page(&query);

    let selection = state.store.questions_ordered().await?;
    let current = paginate(&selection, page);
    let categories = state.store.categories_ordered().await?;

    // Only the requested slice and the category list are checked: an
    // out-of-range page on a non-empty question set reports not-found.
    if current.is_empty() || categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionPageBody::new(
        current,
        selection.len(),
        categories.into_iter().map(|c| c.kind).collect(),
    )))
}

/// Search mode when a non-empty `searchTerm` is present, create mode
/// otherwise.
async fn create_or_search_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let payload: QuestionPayload = parse_body(&body)?;
    let search = payload.search().map(str::to_owned);

    match search {
        Some(term) => {
            let matches = state.store.questions_matching(&term).await?;
            let page = paginate(&matches, requested_page(&query));

            // The category shown beside search results is always the
            // first category row
            let current = state
                .store
                .category_by_id(1)
                .await?
                .ok_or(ApiError::Unprocessable)?;

            Ok(
                Json(FilteredQuestionsBody::new(page, matches.len(), current.kind))
                    .into_response(),
            )
        }
        None => {
            let QuestionPayload {
                question,
                answer,
                difficulty,
                category,
                ..
            } = payload;

            state
                .store
                .insert_question(NewQuestion {
                    question,
                    answer,
                    difficulty,
                    category,
                })
                .await?;

            Ok(Json(QuestionCreatedBody::new()).into_response())
        }
    }
}

/// Delete a question by id.
async fn delete_question_handler(
    State(state): State<Arc<ApiState>>,
    Path(question_id): Path<String>,
) -> Result<Json<QuestionDeletedBody>, ApiError> {
    // A non-numeric id is an unknown path
    let question_id: i64 = question_id.parse().map_err(|_| ApiError::NotFound)?;

    // The lookup miss shares the mutation's failure path: a nonexistent id
    // reports unprocessable, never not-found.
    let question = state
        .store
        .question_by_id(question_id)
        .await?
        .ok_or(ApiError::Unprocessable)?;

    state.store.delete_question(question.id).await?;
    let remaining = state.store.count_questions().await?;

    Ok(Json(QuestionDeletedBody::new(question_id, remaining)))
}
