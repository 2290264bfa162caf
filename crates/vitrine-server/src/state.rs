use std::sync::Arc;

use vitrine_catalog::{CatalogClient, CatalogError};
use vitrine_core::AppConfig;
use vitrine_ui::QuoteComposer;

/// Shared per-process state. Nothing here caches catalog data: every page
/// view loads the product list afresh.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub composer: QuoteComposer,
    pub store_name: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: CatalogClient, whatsapp_number: &str, store_name: &str) -> Self {
        Self {
            catalog: Arc::new(catalog),
            composer: QuoteComposer::new(whatsapp_number),
            store_name: Arc::from(store_name),
        }
    }

    /// # Errors
    ///
    /// Returns [`CatalogError`] when the configured catalog URLs are invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(
            CatalogClient::from_config(config)?,
            &config.whatsapp_number,
            &config.store_name,
        ))
    }
}
