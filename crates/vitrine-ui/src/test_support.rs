//! Product fixtures shared by unit tests.

use rust_decimal::Decimal;
use vitrine_core::{Product, Specifications};

pub(crate) fn product(id: u64, name: &str, category: &str, price: Decimal, promo: bool) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock: 0,
        on_promotion: promo,
        image_url: format!("img/{id}.jpg"),
        mockup_url: None,
        description: String::new(),
        specifications: Specifications::default(),
        campaigns: Vec::new(),
    }
}

/// The three-product fixture used throughout the engine tests.
pub(crate) fn mugs_and_notebook() -> Vec<Product> {
    use rust_decimal_macros::dec;
    vec![
        product(1, "Caneca Azul", "sublimacao", dec!(20), false),
        product(2, "Caneca Rosa", "sublimacao", dec!(15), true),
        product(3, "Caderno", "outros", dec!(10), true),
    ]
}
