//! Query-string parameters of the storefront pages.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use vitrine_core::{CategoryFilter, FilterState, SortMode};

/// Parameters of `GET /` and `GET /api/v1/products`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CatalogQuery {
    pub busca: Option<String>,
    pub categoria: Option<String>,
    /// Checkbox value; `on`, `true`, or `1` enable the filter.
    pub promo: Option<String>,
    pub ordem: Option<String>,
    /// Product whose detail modal is open.
    pub produto: Option<String>,
}

/// Parameters of `GET /campanha`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CampaignQuery {
    pub id: Option<String>,
    pub produto: Option<String>,
}

impl CatalogQuery {
    pub fn filters(&self) -> FilterState {
        let sort = match self.ordem.as_deref().filter(|o| !o.is_empty()) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "unknown sort mode; using default");
                SortMode::default()
            }),
            None => SortMode::default(),
        };
        FilterState::default()
            .with_search(self.busca.as_deref().unwrap_or_default().trim())
            .with_category(CategoryFilter::from_option(
                self.categoria.as_deref().unwrap_or_default(),
            ))
            .with_promo_only(is_checked(self.promo.as_deref()))
            .with_sort(sort)
    }

    pub fn product_id(&self) -> Option<u64> {
        parse_id(self.produto.as_deref())
    }

    /// Link to this page with the same filters and `produto` set or cleared.
    pub fn href(&self, produto: Option<u64>) -> String {
        let filters = self.filters();
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !filters.search_term.is_empty() {
            pairs.push(("busca", filters.search_term.clone()));
        }
        if let CategoryFilter::Only(tag) = &filters.category {
            pairs.push(("categoria", tag.clone()));
        }
        if filters.promo_only {
            pairs.push(("promo", "on".to_owned()));
        }
        if filters.sort != SortMode::default() {
            pairs.push(("ordem", filters.sort.as_str().to_owned()));
        }
        if let Some(id) = produto {
            pairs.push(("produto", id.to_string()));
        }
        encode("/", &pairs)
    }
}

impl CampaignQuery {
    pub fn product_id(&self) -> Option<u64> {
        parse_id(self.produto.as_deref())
    }

    pub fn href(&self, campaign_id: &str, produto: Option<u64>) -> String {
        let mut pairs = vec![("id", campaign_id.to_owned())];
        if let Some(id) = produto {
            pairs.push(("produto", id.to_string()));
        }
        encode("/campanha", &pairs)
    }
}

fn is_checked(raw: Option<&str>) -> bool {
    matches!(raw, Some("on" | "true" | "1"))
}

fn parse_id(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|r| r.trim().parse().ok())
}

fn encode(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_owned();
    }
    let query: Vec<String> = pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", utf8_percent_encode(v, NON_ALPHANUMERIC)))
        .collect();
    format!("{path}?{}", query.join("&"))
}
