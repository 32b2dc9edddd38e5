//! Pagination: a fixed-size window of an ordered result set, selected by a
//! 1-based page number.

/// Questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// The `page`-th window of `items`. Pages before the first and pages past
/// the end both yield an empty slice; callers decide whether an empty page
/// is an error.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }

    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    items.iter().skip(start).take(QUESTIONS_PER_PAGE).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_holds_ten() {
        let items: Vec<i64> = (1..=15).collect();

        let page = paginate(&items, 1);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0], 1);
        assert_eq!(page[9], 10);
    }

    #[test]
    fn test_last_page_holds_remainder() {
        let items: Vec<i64> = (1..=15).collect();

        let page = paginate(&items, 2);
        assert_eq!(page, vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<i64> = (1..=15).collect();

        assert!(paginate(&items, 3).is_empty());
    }

    #[test]
    fn test_non_positive_pages_are_empty() {
        let items: Vec<i64> = (1..=5).collect();

        assert!(paginate(&items, 0).is_empty());
        assert!(paginate(&items, -2).is_empty());
    }

    #[test]
    fn test_empty_input_paginated_is_empty() {
        let items: Vec<i64> = Vec::new();

        assert!(paginate(&items, 1).is_empty());
    }
}
