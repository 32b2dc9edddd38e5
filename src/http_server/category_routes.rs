//! Category HTTP Routes
//!
//! The category index and the per-category question listing.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::api::pagination::paginate;
use crate::api::request::requested_page;
use crate::api::response::{CategoryListBody, FilteredQuestionsBody};
use crate::observability::Logger;

use super::server::ApiState;

/// Create category routes
pub fn category_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category_handler),
        )
        .with_state(state)
}

/// Every category label in id order, with the full count.
async fn list_categories_handler(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<CategoryListBody>, ApiError> {
    // A failed fetch is folded to an empty list, and the emptiness check
    // runs first: a fetch failure therefore reports not-found rather than
    // unprocessable.
    let (categories, fetch_failed) = match state.store.categories_ordered().await {
        Ok(rows) => (rows, false),
        Err(err) => {
            Logger::error("CATEGORY_FETCH_FAILED", &[("error", &err.to_string())]);
            (Vec::new(), true)
        }
    };

    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    if fetch_failed {
        return Err(ApiError::Unprocessable);
    }

    let total = state.store.count_categories().await?;

    Ok(Json(CategoryListBody::new(
        categories.into_iter().map(|c| c.kind).collect(),
        total,
    )))
}

/// A page of one category's questions, with the unpaginated match count.
async fn questions_by_category_handler(
    State(state): State<Arc<ApiState>>,
    Path(category_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<FilteredQuestionsBody>, ApiError> {
    // A non-numeric id is an unknown path
    let category_id: i64 = category_id.parse().map_err(|_| ApiError::NotFound)?;
    let page = requested_page(&query);

    let selection = state.store.questions_in_category(category_id).await?;
    let current = paginate(&selection, page);
    let category = state.store.category_by_id(category_id).await?;

    // An existing category with an empty page is still not-found
    let category = match category {
        Some(row) if !current.is_empty() => row,
        _ => return Err(ApiError::NotFound),
    };

    Ok(Json(FilteredQuestionsBody::new(
        current,
        selection.len(),
        category.kind,
    )))
}
