use std::collections::HashSet;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use vitrine_core::{AppConfig, CampaignMap, Product};

use crate::error::CatalogError;
use crate::load_state::LoadState;
use crate::origin::{extract_site_origin, join_file, parse_base};

/// Name of the query parameter carrying the cache-busting timestamp.
const CACHE_BUST_PARAM: &str = "v";

/// HTTP client for the storefront's static `data.json` and `campaigns.json`.
///
/// Every request carries a fresh `v=<unix millis>` query parameter so
/// intermediate caches never serve a stale list. There is no retry: a failed
/// load is terminal for the page view that triggered it.
pub struct CatalogClient {
    client: Client,
    products_url: String,
    campaigns_url: String,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout and `User-Agent`.
    ///
    /// `site_root_url` locates `campaigns.json`; when `None`, the origin of
    /// `catalog_base_url` is used.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidUrl`] if either URL is not an absolute http(s) URL.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        catalog_base_url: &str,
        site_root_url: Option<&str>,
    ) -> Result<Self, CatalogError> {
        parse_base(catalog_base_url)?;
        let site_root = match site_root_url {
            Some(root) => {
                parse_base(root)?;
                root.to_owned()
            }
            None => extract_site_origin(catalog_base_url)?,
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            products_url: join_file(catalog_base_url, "data.json"),
            campaigns_url: join_file(&site_root, "campaigns.json"),
        })
    }

    /// Builds a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            config.request_timeout_secs,
            &config.user_agent,
            &config.catalog_base_url,
            config.site_root_url.as_deref(),
        )
    }

    /// The product list URL, without the cache-busting parameter.
    #[must_use]
    pub fn products_url(&self) -> &str {
        &self.products_url
    }

    /// The campaign metadata URL, without the cache-busting parameter.
    #[must_use]
    pub fn campaigns_url(&self) -> &str {
        &self.campaigns_url
    }

    /// Fetches and parses the product list.
    ///
    /// Records repeating an already-seen `id` are dropped with a warning so
    /// identifiers stay unique within a load.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`]: HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`CatalogError::Http`]: network or TLS failure.
    /// - [`CatalogError::Deserialize`]: body is not a JSON list of products.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = self.get_json(&self.products_url, "product list").await?;
        Ok(dedupe_by_id(products))
    }

    /// Loads the product list as a [`LoadState`], logging failures.
    pub async fn load_products(&self) -> LoadState {
        match self.fetch_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "product list loaded");
                LoadState::loaded(products)
            }
            Err(e) => {
                tracing::error!(error = %e, url = %self.products_url, "failed to load products");
                LoadState::LoadFailed(e.to_string())
            }
        }
    }

    /// Fetches and parses the campaign metadata map.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_products`].
    pub async fn fetch_campaigns(&self) -> Result<CampaignMap, CatalogError> {
        self.get_json(&self.campaigns_url, "campaign metadata").await
    }

    /// Loads campaign metadata, substituting [`CampaignMap::fallback`] on any
    /// failure so campaign pages still render generic header text.
    pub async fn load_campaigns(&self) -> CampaignMap {
        match self.fetch_campaigns().await {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    url = %self.campaigns_url,
                    "failed to load campaigns; using fallback"
                );
                CampaignMap::fallback()
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, CatalogError> {
        let request_url = cache_busted(url, chrono::Utc::now().timestamp_millis());
        let response = self.client.get(&request_url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
            context: format!("{context} from {url}"),
            source: e,
        })
    }
}

/// Appends the cache-busting parameter to `url`.
fn cache_busted(url: &str, stamp: i64) -> String {
    match reqwest::Url::parse(url) {
        Ok(mut parsed) => {
            parsed
                .query_pairs_mut()
                .append_pair(CACHE_BUST_PARAM, &stamp.to_string());
            parsed.to_string()
        }
        Err(_) => format!("{url}?{CACHE_BUST_PARAM}={stamp}"),
    }
}

fn dedupe_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::with_capacity(products.len());
    products
        .into_iter()
        .filter(|p| {
            let first = seen.insert(p.id);
            if !first {
                tracing::warn!(id = p.id, name = %p.name, "dropping product with duplicate id");
            }
            first
        })
        .collect()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
