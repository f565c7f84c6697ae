//! Ordering and slicing of tier output

use crate::types::RankedResult;

/// Sort by score, highest first. Equal scores keep their discovery order.
pub fn rank(mut matches: Vec<RankedResult>) -> Vec<RankedResult> {
    // sort_by is stable
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches
}

/// Slice out 1-based `page` of `page_size` items.
///
/// Returns the slice and the total item count before slicing. A page past the
/// end yields an empty slice with an accurate total.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> (Vec<T>, usize) {
    let total = items.len();
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let slice = items.into_iter().skip(start).take(page_size).collect();
    (slice, total)
}
