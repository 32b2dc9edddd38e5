//! Quiz HTTP Routes

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::post,
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::pagination::paginate;
use crate::api::quiz;
use crate::api::request::{parse_body, requested_page, QuizPayload};
use crate::api::response::QuizBody;
use crate::store::Question;

use super::server::ApiState;

/// Create quiz routes
pub fn quiz_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/quizzes", post(next_question_handler))
        .with_state(state)
}

/// Pick a random question from the selected category pool that has not
/// been asked in this quiz yet.
async fn next_question_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<Json<QuizBody>, ApiError> {
    let payload: QuizPayload = parse_body(&body)?;

    let pool = match quiz::pool_filter(payload.quiz_category.as_ref())? {
        None => state.store.questions_ordered().await?,
        Some(category) => state.store.questions_in_category(category).await?,
    };

    // The pool check runs before the previous-question list is read
    if pool.is_empty() {
        return Err(ApiError::NotFound);
    }

    let previous = quiz::previous_ids(payload.previous_questions.as_ref())?;
    let ids: Vec<i64> = pool.iter().map(|q| q.id).collect();

    if quiz::pool_exhausted(&ids, &previous) {
        return Ok(Json(QuizBody::exhausted()));
    }

    let picked = quiz::pick_unasked(&ids, &previous).ok_or(ApiError::Unprocessable)?;

    let selection: Vec<Question> = state
        .store
        .question_by_id(picked)
        .await?
        .into_iter()
        .collect();
    let next = paginate(&selection, requested_page(&query));

    Ok(Json(QuizBody::page(next)))
}
