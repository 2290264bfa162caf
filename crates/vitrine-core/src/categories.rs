//! Category tags and their display labels.

use crate::products::Product;

/// Categories that always get a filter option, even when no product uses them.
pub const CANONICAL_CATEGORIES: [&str; 5] = [
    "manutencao",
    "sublimacao",
    "personalizados",
    "convites_digitais",
    "outros",
];

/// Sentinel option meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Label shown on product cards: underscores become spaces.
#[must_use]
pub fn category_label(tag: &str) -> String {
    tag.replace('_', " ")
}

/// Label shown on filter options: first letter upper-cased, underscores
/// after it become spaces.
#[must_use]
pub fn option_label(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '_' { ' ' } else { c }))
            .collect(),
        None => String::new(),
    }
}

/// Filter option values: `all`, then the canonical categories, then any
/// other category observed in `products`, in first-seen order without
/// duplicates.
#[must_use]
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    let observed = products.iter().map(|p| p.category.as_str());
    for category in CANONICAL_CATEGORIES.into_iter().chain(observed) {
        if !options.iter().any(|o| o == category) {
            options.push(category.to_string());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::products::Specifications;

    fn product_in(category: &str) -> Product {
        Product {
            id: 1,
            name: "x".into(),
            category: category.into(),
            price: Decimal::ONE,
            stock: 0,
            on_promotion: false,
            image_url: String::new(),
            mockup_url: None,
            description: String::new(),
            specifications: Specifications::default(),
            campaigns: vec![],
        }
    }

    #[test]
    fn labels() {
        assert_eq!(category_label("convites_digitais"), "convites digitais");
        assert_eq!(option_label("convites_digitais"), "Convites digitais");
        assert_eq!(option_label("all"), "All");
        assert_eq!(option_label(""), "");
    }

    #[test]
    fn option_label_keeps_leading_underscore() {
        assert_eq!(option_label("_rascunho_antigo"), "_rascunho antigo");
        assert_eq!(option_label("é_novo"), "É novo");
    }

    #[test]
    fn options_union_canonical_and_observed() {
        let products = vec![
            product_in("sublimacao"),
            product_in("papelaria"),
            product_in("papelaria"),
            product_in("brindes"),
        ];
        assert_eq!(
            category_options(&products),
            vec![
                "all",
                "manutencao",
                "sublimacao",
                "personalizados",
                "convites_digitais",
                "outros",
                "papelaria",
                "brindes",
            ]
        );
    }

    #[test]
    fn options_without_products_are_canonical() {
        assert_eq!(category_options(&[]).len(), 1 + CANONICAL_CATEGORIES.len());
    }
}
