use std::sync::Arc;

use vitrine_core::Product;

/// Outcome of loading the product list for one page view.
///
/// Keeps "nothing matched the filters" (an empty `Loaded` view) distinct from
/// "the list never arrived" (`LoadFailed`).
#[derive(Debug, Clone, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Arc<[Product]>),
    LoadFailed(String),
}

impl LoadState {
    #[must_use]
    pub fn loaded(products: Vec<Product>) -> Self {
        LoadState::Loaded(products.into())
    }

    /// The loaded list; empty while loading or after a failure.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            LoadState::Loaded(products) => products,
            LoadState::Loading | LoadState::LoadFailed(_) => &[],
        }
    }

    #[must_use]
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::LoadFailed(_))
    }
}
