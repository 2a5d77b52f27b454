//! Client-side filter and sort pass over a freshly loaded list.

use crate::catalog::Item;

use super::state::SortOrder;

/// Narrow `items` to `category` (exact, case-sensitive; empty keeps all) and
/// sort them by price according to `order`.
///
/// The sort is stable, so items with equal prices keep their relative order
/// in both directions. Running this twice with the same arguments gives the
/// same result as running it once.
pub fn apply_filters(mut items: Vec<Item>, category: &str, order: SortOrder) -> Vec<Item> {
    if !category.is_empty() {
        items.retain(|item| item.category == category);
    }

    match order {
        SortOrder::None => {}
        SortOrder::PriceAscending => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDescending => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    items
}
