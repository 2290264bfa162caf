//! Product detail view model and the open/close lifecycle of the modal
//! that shows it.

use serde::Serialize;
use vitrine_core::{format_price, Product};

pub const QUOTE_BUTTON_TEXT: &str = "Solicitar Orçamento";
const STOCK_ON_REQUEST: &str = "Sob consulta";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductDetail {
    pub id: u64,
    pub name: String,
    pub image_url: String,
    pub price_label: String,
    /// `"Estoque: 5 unidades"` or `"Estoque: Sob consulta"`.
    pub stock_line: String,
    pub description: String,
    /// One row per present specification field, in fixed order.
    pub spec_rows: Vec<SpecRow>,
    pub quantity: QuantityInput,
    pub quote_button: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

/// Bounds of the numeric quantity input. Advisory only: the quote composer
/// does not re-check them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityInput {
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

impl ProductDetail {
    #[must_use]
    pub fn render(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            price_label: format_price(product.price),
            stock_line: stock_line(product.stock),
            description: product.description.clone(),
            spec_rows: spec_rows(product),
            quantity: QuantityInput {
                value: 1,
                min: 1,
                max: product.max_orderable(),
            },
            quote_button: QUOTE_BUTTON_TEXT,
        }
    }
}

fn stock_line(stock: u32) -> String {
    if stock > 0 {
        format!("Estoque: {stock} unidades")
    } else {
        format!("Estoque: {STOCK_ON_REQUEST}")
    }
}

fn spec_rows(product: &Product) -> Vec<SpecRow> {
    let specs = &product.specifications;
    let join = |values: &[String]| {
        let present: Vec<&str> = values
            .iter()
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .collect();
        (!present.is_empty()).then(|| present.join(", "))
    };

    [
        ("Material", specs.material().map(str::to_owned)),
        ("Dimensões", specs.dimensions().map(str::to_owned)),
        ("Cores", join(&specs.colors)),
        ("Tamanhos", join(&specs.sizes)),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|value| SpecRow { label, value }))
    .collect()
}

/// Where a click inside the modal overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTarget {
    CloseButton,
    /// The overlay outside the content box.
    Backdrop,
    Content,
}

/// Open/close state of the single detail modal on a page.
#[derive(Debug, Default)]
pub struct DetailModal {
    content: Option<ProductDetail>,
    quantity: String,
}

impl DetailModal {
    /// Shows `product`, replacing whatever was open, and resets the quantity
    /// input to its default.
    pub fn open(&mut self, product: &Product) -> &ProductDetail {
        let detail = ProductDetail::render(product);
        self.quantity = detail.quantity.value.to_string();
        self.content.insert(detail)
    }

    /// Returns `true` if the modal was open.
    pub fn close(&mut self) -> bool {
        self.content.take().is_some()
    }

    /// Closes on the close control or a backdrop click; clicks on the
    /// content box are ignored. Returns `true` if the modal closed.
    pub fn handle_click(&mut self, target: ModalTarget) -> bool {
        match target {
            ModalTarget::CloseButton | ModalTarget::Backdrop => self.close(),
            ModalTarget::Content => false,
        }
    }

    /// Closes on `Escape`. Returns `true` if the modal closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Stores the quantity input's raw value.
    pub fn set_quantity(&mut self, raw: impl Into<String>) {
        self.quantity = raw.into();
    }

    #[must_use]
    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    #[must_use]
    pub fn content(&self) -> Option<&ProductDetail> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// Background scrolling is disabled exactly while the modal is open.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
#[path = "modal_test.rs"]
mod tests;
