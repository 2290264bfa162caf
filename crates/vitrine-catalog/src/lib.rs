pub mod client;
pub mod error;
pub mod load_state;
pub mod origin;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use load_state::LoadState;
