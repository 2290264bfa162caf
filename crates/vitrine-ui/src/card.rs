//! Summary card view model for one product in the grid.

use serde::Serialize;
use vitrine_core::{category_label, format_price, Product};

pub const PROMO_BADGE: &str = "OFERTA";
pub const MOCKUP_LINK_TEXT: &str = "Ver mais mockups";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCard {
    pub id: u64,
    pub name: String,
    /// Raw tag; kept for filtering hooks and `data-` attributes.
    pub category: String,
    /// Underscores replaced by spaces.
    pub category_label: String,
    pub price_label: String,
    pub image_url: String,
    /// Image loads lazily.
    pub lazy_image: bool,
    pub promo_badge: Option<&'static str>,
    pub mockup_link: Option<MockupLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockupLink {
    pub url: String,
    pub text: &'static str,
    /// Opens in a new browsing context with `noopener noreferrer`.
    pub new_context: bool,
}

/// Where a click on a card landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    MockupLink,
    Body,
}

/// What a click on a card does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Follow the mockup gallery link; the card's own handler does not run.
    OpenMockups(String),
    OpenDetail(u64),
}

impl ProductCard {
    #[must_use]
    pub fn render(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            category_label: category_label(&product.category),
            price_label: format_price(product.price),
            image_url: product.image_url.clone(),
            lazy_image: true,
            promo_badge: product.on_promotion.then_some(PROMO_BADGE),
            mockup_link: product.mockup_url().map(|url| MockupLink {
                url: url.to_owned(),
                text: MOCKUP_LINK_TEXT,
                new_context: true,
            }),
        }
    }

    /// Resolves a click. A click on the mockup link never propagates to the
    /// card, so it never opens the detail view.
    #[must_use]
    pub fn click(&self, target: CardTarget) -> CardAction {
        match (target, &self.mockup_link) {
            (CardTarget::MockupLink, Some(link)) => CardAction::OpenMockups(link.url.clone()),
            _ => CardAction::OpenDetail(self.id),
        }
    }
}
