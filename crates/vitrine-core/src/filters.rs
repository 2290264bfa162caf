use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::categories::ALL_CATEGORIES;
use crate::CoreError;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Identifier ascending.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 5] = [
        SortMode::Default,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::NameAsc,
        SortMode::NameDesc,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::NameAsc => "name-asc",
            SortMode::NameDesc => "name-desc",
        }
    }

    /// Label for the sort selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Default => "Padrão",
            SortMode::PriceAsc => "Menor preço",
            SortMode::PriceDesc => "Maior preço",
            SortMode::NameAsc => "Nome (A-Z)",
            SortMode::NameDesc => "Nome (Z-A)",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSortMode(s.to_string()))
    }
}

/// Selected category: the `all` sentinel or an exact category tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses an option value; `all` and the empty string mean no filter.
    #[must_use]
    pub fn from_option(value: &str) -> Self {
        if value.is_empty() || value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn as_option(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(tag) => tag,
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => tag == category,
        }
    }
}

/// One page's filter and sort selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub search_term: String,
    pub category: CategoryFilter,
    pub promo_only: bool,
    pub sort: SortMode,
}

impl FilterState {
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_promo_only(mut self, promo_only: bool) -> Self {
        self.promo_only = promo_only;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// `true` when no filter narrows the list (sort may still apply).
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category == CategoryFilter::All && !self.promo_only
    }
}
