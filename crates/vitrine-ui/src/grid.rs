use serde::Serialize;
use vitrine_catalog::LoadState;
use vitrine_core::{CampaignDetails, CampaignMap, FilterState, DEFAULT_CAMPAIGN_ID};

use crate::card::ProductCard;
use crate::engine;

/// Which page is being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMode {
    /// Full catalog with search, category, promotion, and sort controls.
    Catalog,
    /// Products of one campaign, in load order, under the campaign's header.
    Campaign { id: String, details: CampaignDetails },
}

impl PageMode {
    /// Campaign page for `id` (absent → `default`), with header text looked
    /// up in `campaigns`.
    #[must_use]
    pub fn campaign(id: Option<&str>, campaigns: &CampaignMap) -> Self {
        let id = id
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_CAMPAIGN_ID)
            .to_owned();
        let details = campaigns.resolve(&id);
        PageMode::Campaign { id, details }
    }

    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        match self {
            PageMode::Catalog => "Nenhum produto encontrado com os filtros selecionados.",
            PageMode::Campaign { .. } => {
                "Nenhum produto encontrado para esta campanha no momento."
            }
        }
    }

    #[must_use]
    pub fn failure_message(&self) -> &'static str {
        match self {
            PageMode::Catalog => "Erro ao carregar produtos. Tente recarregar a página.",
            PageMode::Campaign { .. } => {
                "Erro ao carregar produtos da campanha. Tente recarregar a página."
            }
        }
    }
}

/// Contents of the product area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridView {
    Loading,
    Cards { cards: Vec<ProductCard> },
    /// Loaded, but nothing to show.
    Empty { message: &'static str },
    /// The list never arrived; no partial list is shown.
    Failed { message: &'static str },
}

impl GridView {
    #[must_use]
    pub fn build(load: &LoadState, mode: &PageMode, filters: &FilterState) -> Self {
        let products = match load {
            LoadState::Loading => return GridView::Loading,
            LoadState::LoadFailed(_) => {
                return GridView::Failed {
                    message: mode.failure_message(),
                }
            }
            LoadState::Loaded(products) => products,
        };

        let view = match mode {
            PageMode::Catalog => engine::apply(products, filters),
            PageMode::Campaign { id, .. } => engine::campaign_products(products, id),
        };

        if view.is_empty() {
            GridView::Empty {
                message: mode.empty_message(),
            }
        } else {
            GridView::Cards {
                cards: view.into_iter().map(ProductCard::render).collect(),
            }
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            GridView::Cards { cards } => cards,
            _ => &[],
        }
    }
}
