use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved campaign id whose entry supplies the generic header text.
pub const DEFAULT_CAMPAIGN_ID: &str = "default";

const FALLBACK_TITLE: &str = "Campanha Especial";
const FALLBACK_DESCRIPTION: &str = "Produtos selecionados especialmente para você.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDetails {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Campaign id → display text, as published in `campaigns.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignMap(BTreeMap<String, CampaignDetails>);

impl CampaignMap {
    /// The single-entry map substituted when campaign metadata cannot be loaded.
    #[must_use]
    pub fn fallback() -> Self {
        let mut map = BTreeMap::new();
        map.insert(DEFAULT_CAMPAIGN_ID.to_string(), fallback_details());
        Self(map)
    }

    /// Looks up `id`, falling back to the `default` entry.
    ///
    /// A published map without a `default` entry still resolves to the
    /// built-in generic text.
    #[must_use]
    pub fn resolve(&self, id: &str) -> CampaignDetails {
        self.0
            .get(id)
            .or_else(|| self.0.get(DEFAULT_CAMPAIGN_ID))
            .cloned()
            .unwrap_or_else(fallback_details)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, CampaignDetails)> for CampaignMap {
    fn from_iter<I: IntoIterator<Item = (String, CampaignDetails)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn fallback_details() -> CampaignDetails {
    CampaignDetails {
        title: FALLBACK_TITLE.to_string(),
        description: FALLBACK_DESCRIPTION.to_string(),
    }
}
