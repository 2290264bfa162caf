//! Product records as published in the storefront's `data.json`.
//!
//! Field names on the wire are the storefront's Portuguese camelCase keys
//! (`nome`, `preco`, `emPromocao`, ...). Optional pieces that are missing,
//! `null`, or empty strings are all treated as absent so renderers can
//! simply omit them.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};

/// A single catalog entry. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within a load; default sort key and DOM key.
    pub id: u64,

    #[serde(rename = "nome")]
    pub name: String,

    /// Raw category tag (e.g. `"convites_digitais"`). Filtering compares this
    /// value exactly; display labels are derived separately.
    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "preco")]
    pub price: Decimal,

    /// `0` means "on request", not "out of stock".
    #[serde(rename = "estoque", default)]
    pub stock: u32,

    #[serde(rename = "emPromocao", default)]
    pub on_promotion: bool,

    #[serde(rename = "imagem", default, deserialize_with = "null_as_default")]
    pub image_url: String,

    #[serde(rename = "linkMockups", default, skip_serializing_if = "Option::is_none")]
    pub mockup_url: Option<String>,

    #[serde(rename = "descricao", default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(
        rename = "especificacoes",
        default,
        deserialize_with = "null_as_default"
    )]
    pub specifications: Specifications,

    /// Campaign ids this product is listed under; membership is exact match.
    #[serde(rename = "campanhas", default, deserialize_with = "null_as_default")]
    pub campaigns: Vec<String>,
}

/// The optional material/dimensions/colors/sizes bundle of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    #[serde(rename = "dimensoes", default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,

    #[serde(rename = "cores", default, deserialize_with = "null_as_default")]
    pub colors: Vec<String>,

    #[serde(rename = "tamanhos", default, deserialize_with = "null_as_default")]
    pub sizes: Vec<String>,
}

impl Product {
    /// Mockup gallery link, ignoring empty strings.
    #[must_use]
    pub fn mockup_url(&self) -> Option<&str> {
        non_empty(self.mockup_url.as_deref())
    }

    /// Whether this product is listed under `campaign_id` (exact match).
    #[must_use]
    pub fn in_campaign(&self, campaign_id: &str) -> bool {
        self.campaigns.iter().any(|c| c == campaign_id)
    }

    /// Largest quantity the detail view's quantity input allows.
    ///
    /// Stock bounds the quantity, but at least one unit can always be
    /// requested since zero stock means "on request".
    #[must_use]
    pub fn max_orderable(&self) -> u32 {
        self.stock.max(1)
    }
}

impl Specifications {
    #[must_use]
    pub fn material(&self) -> Option<&str> {
        non_empty(self.material.as_deref())
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<&str> {
        non_empty(self.dimensions.as_deref())
    }
}

/// Formats a price as Brazilian reais: `R$ 1234,50`.
///
/// Two decimals, comma decimal separator, no thousands grouping.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("R$ {rounded:.2}").replacen('.', ",", 1)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Deserializes `null` as `T::default()` in addition to honoring `#[serde(default)]`
/// for a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
