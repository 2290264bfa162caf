//! Whole-page view model shared by every host.

use serde::Serialize;
use vitrine_catalog::LoadState;
use vitrine_core::{category_options, option_label, FilterState, SortMode, Theme};

use crate::grid::{GridView, PageMode};
use crate::modal::ProductDetail;
use crate::scroll::BACK_TO_TOP_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub document_title: String,
    pub theme: Theme,
    /// Campaign pages only.
    pub header: Option<CampaignHeader>,
    /// Catalog page only; empty on campaign pages.
    pub category_options: Vec<CategoryOption>,
    pub sort_options: Vec<SortOption>,
    pub search_term: String,
    pub promo_only: bool,
    pub grid: GridView,
    pub modal: Option<ProductDetail>,
    pub scroll_locked: bool,
    pub back_to_top_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignHeader {
    pub id: String,
    pub title: String,
    /// Omitted when the campaign has no description.
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Inputs that stay fixed for a page view.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub mode: &'a PageMode,
    pub store_name: &'a str,
    pub theme: Theme,
}

/// Builds the page from the current load state, filters, and open detail.
#[must_use]
pub fn build_page(
    ctx: PageContext<'_>,
    load: &LoadState,
    filters: &FilterState,
    modal: Option<&ProductDetail>,
) -> PageView {
    let (document_title, header) = match ctx.mode {
        PageMode::Catalog => (ctx.store_name.to_owned(), None),
        PageMode::Campaign { id, details } => (
            format!("{} - {}", details.title, ctx.store_name),
            Some(CampaignHeader {
                id: id.clone(),
                title: details.title.clone(),
                description: Some(details.description.clone()).filter(|d| !d.is_empty()),
            }),
        ),
    };

    let category_options = match ctx.mode {
        PageMode::Catalog => category_options(load.products())
            .into_iter()
            .map(|value| CategoryOption {
                label: option_label(&value),
                selected: filters.category.as_option() == value,
                value,
            })
            .collect(),
        PageMode::Campaign { .. } => Vec::new(),
    };

    let sort_options = SortMode::ALL
        .into_iter()
        .map(|mode| SortOption {
            value: mode.as_str(),
            label: mode.label(),
            selected: mode == filters.sort,
        })
        .collect();

    PageView {
        document_title,
        theme: ctx.theme,
        header,
        category_options,
        sort_options,
        search_term: filters.search_term.clone(),
        promo_only: filters.promo_only,
        grid: GridView::build(load, ctx.mode, filters),
        modal: modal.cloned(),
        scroll_locked: modal.is_some(),
        back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use vitrine_core::{CampaignDetails, CampaignMap, CategoryFilter};

    use super::*;
    use crate::test_support::mugs_and_notebook;

    #[test]
    fn catalog_page_lists_category_options_with_selection() {
        let load = LoadState::loaded(mugs_and_notebook());
        let filters =
            FilterState::default().with_category(CategoryFilter::Only("sublimacao".into()));
        let page = build_page(
            PageContext {
                mode: &PageMode::Catalog,
                store_name: "Loja",
                theme: Theme::Dark,
            },
            &load,
            &filters,
            None,
        );

        assert_eq!(page.document_title, "Loja");
        assert!(page.header.is_none());
        assert_eq!(page.category_options[0].value, "all");
        assert_eq!(page.category_options[0].label, "All");
        let selected: Vec<&str> = page
            .category_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(selected, vec!["sublimacao"]);
        assert_eq!(page.sort_options.iter().filter(|o| o.selected).count(), 1);
        assert!(!page.scroll_locked);
    }

    #[test]
    fn campaign_page_header_and_title() {
        let campaigns: CampaignMap = [(
            "natal".to_string(),
            CampaignDetails {
                title: "Especial de Natal".into(),
                description: String::new(),
            },
        )]
        .into_iter()
        .collect();
        let mode = PageMode::campaign(Some("natal"), &campaigns);
        let page = build_page(
            PageContext {
                mode: &mode,
                store_name: "Catálogo Lima Calixto",
                theme: Theme::Light,
            },
            &LoadState::loaded(mugs_and_notebook()),
            &FilterState::default(),
            None,
        );

        assert_eq!(
            page.document_title,
            "Especial de Natal - Catálogo Lima Calixto"
        );
        let header = page.header.expect("campaign header");
        assert_eq!(header.title, "Especial de Natal");
        assert_eq!(header.description, None);
        assert!(page.category_options.is_empty());
    }
}
