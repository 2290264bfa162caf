//! Quote requests as pre-filled WhatsApp messages.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use vitrine_core::Product;

const WHATSAPP_BASE: &str = "https://wa.me";

/// Characters left unescaped by the browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A composed quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    pub message: String,
    pub url: String,
}

/// Builds quote deep links for one destination number.
#[derive(Debug, Clone)]
pub struct QuoteComposer {
    phone_number: String,
}

impl QuoteComposer {
    #[must_use]
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }

    /// Composes the message and deep link for `quantity` units of `product`.
    ///
    /// `quantity` is used verbatim as typed into the quantity input.
    #[must_use]
    pub fn compose(&self, product: &Product, quantity: &str) -> QuoteRequest {
        let message = compose_message(product, quantity);
        let url = format!(
            "{WHATSAPP_BASE}/{}?text={}",
            self.phone_number,
            utf8_percent_encode(&message, URI_COMPONENT)
        );
        tracing::debug!(product_id = product.id, quantity, "quote composed");
        QuoteRequest { message, url }
    }
}

/// The fixed-template quote message, before percent-encoding.
#[must_use]
pub fn compose_message(product: &Product, quantity: &str) -> String {
    format!(
        "Olá! Tenho interesse em *{quantity} unidade(s)* do produto: *{}* (ID: {}).\n\nGostaria de solicitar um orçamento.",
        product.name, product.id
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::test_support::product;

    #[test]
    fn message_matches_template() {
        let shirt = product(7, "Camiseta", "personalizados", dec!(49.9), false);
        assert_eq!(
            compose_message(&shirt, "3"),
            "Olá! Tenho interesse em *3 unidade(s)* do produto: *Camiseta* (ID: 7).\n\nGostaria de solicitar um orçamento."
        );
    }

    #[test]
    fn link_is_percent_encoded_like_encode_uri_component() {
        let shirt = product(7, "Camiseta", "personalizados", dec!(49.9), false);
        let quote = QuoteComposer::new("5511999999999").compose(&shirt, "3");
        assert_eq!(
            quote.url,
            "https://wa.me/5511999999999?text=Ol%C3%A1!%20Tenho%20interesse%20em%20*3%20unidade(s)*%20do%20produto%3A%20*Camiseta*%20(ID%3A%207).%0A%0AGostaria%20de%20solicitar%20um%20or%C3%A7amento."
        );
    }

    #[test]
    fn quantity_is_not_validated() {
        let shirt = product(7, "Camiseta", "personalizados", dec!(49.9), false);
        let quote = QuoteComposer::new("5511999999999").compose(&shirt, "500");
        assert!(quote.message.contains("*500 unidade(s)*"));
    }
}
