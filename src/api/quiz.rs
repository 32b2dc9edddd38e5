//! Quiz next-question selection.
//!
//! Derives the candidate-pool filter from the client's category selector
//! and picks an unseen question uniformly at random.

use rand::seq::SliceRandom;
use serde_json::Value;

use super::errors::ApiError;

/// Selector value the client sends when "All categories" is chosen
const ALL_CATEGORIES: &str = "click";

/// The category filter for the quiz pool: `None` plays across every
/// category, otherwise the stored category id.
///
/// The client's selector ids are 0-based while stored categories are
/// 1-based, so the coerced id is shifted up by one. Client compatibility
/// depends on this shift.
pub fn pool_filter(quiz_category: Option<&Value>) -> Result<Option<i64>, ApiError> {
    let category = quiz_category.ok_or(ApiError::Unprocessable)?;
    let fields = category.as_object().ok_or(ApiError::Unprocessable)?;
    let kind = fields.get("type").ok_or(ApiError::Unprocessable)?;

    if kind.as_str() == Some(ALL_CATEGORIES) {
        return Ok(None);
    }

    let id = fields.get("id").ok_or(ApiError::Unprocessable)?;
    let id = coerce_int(id).ok_or(ApiError::Unprocessable)?;

    Ok(Some(id + 1))
}

/// Accepts a JSON number or a numeric string, like a lenient integer parse.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// The already-asked id list; anything but a list of integers is a request
/// the quiz cannot proceed with.
pub fn previous_ids(previous: Option<&Value>) -> Result<Vec<i64>, ApiError> {
    let list = previous
        .and_then(Value::as_array)
        .ok_or(ApiError::Unprocessable)?;

    list.iter()
        .map(|v| v.as_i64().ok_or(ApiError::Unprocessable))
        .collect()
}

/// True when every candidate has been asked: the candidate ids sorted
/// ascending equal the previous list sorted ascending.
pub fn pool_exhausted(pool_ids: &[i64], previous: &[i64]) -> bool {
    let mut ids_sorted = pool_ids.to_vec();
    ids_sorted.sort_unstable();
    let mut prev_sorted = previous.to_vec();
    prev_sorted.sort_unstable();

    ids_sorted == prev_sorted
}

/// Uniformly random id from the pool that has not been asked yet, or
/// `None` when the exclusion leaves nothing to pick.
pub fn pick_unasked(pool_ids: &[i64], previous: &[i64]) -> Option<i64> {
    let remaining: Vec<i64> = pool_ids
        .iter()
        .copied()
        .filter(|id| !previous.contains(id))
        .collect();

    remaining.choose(&mut rand::thread_rng()).copied()
}
