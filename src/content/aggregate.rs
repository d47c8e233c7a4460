//! Merge, sort, and paginate unified content items.

use std::cmp::Reverse;

use serde::Serialize;

use crate::content::item::ContentItem;

/// One page of a sorted listing.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedView {
    pub items: Vec<ContentItem>,
    pub page: usize,
    pub page_size: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Concatenate the given lists and sort descending by date.
///
/// The sort is stable: items with equal (or equally unparseable) dates keep
/// their input order.
pub fn merge_and_sort(lists: Vec<Vec<ContentItem>>) -> Vec<ContentItem> {
    let mut items: Vec<ContentItem> = lists.into_iter().flatten().collect();
    items.sort_by_key(|item| Reverse(item.sort_key()));
    items
}

/// Slice a 1-indexed page out of a sorted listing.
///
/// Pages below 1 clamp to 1 rather than producing a negative slice.
pub fn paginate(items: Vec<ContentItem>, page: usize, page_size: usize) -> PaginatedView {
    let page = page.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(page_size);

    PaginatedView {
        items: items.into_iter().skip(start).take(page_size).collect(),
        page,
        page_size,
        has_prev: page > 1,
        has_next: total > page.saturating_mul(page_size),
    }
}
