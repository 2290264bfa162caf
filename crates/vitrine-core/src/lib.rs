pub mod app_config;
pub mod campaigns;
pub mod categories;
pub mod config;
pub mod filters;
pub mod products;
pub mod theme;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use campaigns::{CampaignDetails, CampaignMap, DEFAULT_CAMPAIGN_ID};
pub use categories::{
    category_label, category_options, option_label, ALL_CATEGORIES, CANONICAL_CATEGORIES,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::{CategoryFilter, FilterState, SortMode};
pub use products::{format_price, Product, Specifications};
pub use theme::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid sort mode: {0}")]
    InvalidSortMode(String),

    #[error("invalid theme: {0}")]
    InvalidTheme(String),
}
