//! Filter/sort pipeline from a loaded product list to an ordered view.
//!
//! The pipeline runs strictly in order: search, category, promotion, sort.
//! The input slice is never reordered; callers get a fresh list of borrows.

use vitrine_core::{FilterState, Product, SortMode};

use crate::collate::compare_names;

/// Applies `state` to `products`, returning the ordered view.
#[must_use]
pub fn apply<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let term = state.search_term.to_lowercase();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|p| term.is_empty() || matches_search(p, &term))
        .filter(|p| state.category.matches(&p.category))
        .filter(|p| !state.promo_only || p.on_promotion)
        .collect();

    sort(&mut view, state.sort);
    view
}

/// Products listed under `campaign_id`, in load order.
#[must_use]
pub fn campaign_products<'a>(products: &'a [Product], campaign_id: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| p.in_campaign(campaign_id)).collect()
}

/// Case-insensitive substring match on name, description, or category.
///
/// `lowered_term` must already be lower-cased.
fn matches_search(product: &Product, lowered_term: &str) -> bool {
    [&product.name, &product.description, &product.category]
        .into_iter()
        .any(|field| field.to_lowercase().contains(lowered_term))
}

fn sort(view: &mut [&Product], mode: SortMode) {
    match mode {
        SortMode::Default => view.sort_by_key(|p| p.id),
        SortMode::PriceAsc => view.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDesc => view.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::NameAsc => view.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::NameDesc => view.sort_by(|a, b| compare_names(&b.name, &a.name)),
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
