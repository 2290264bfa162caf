//! Storefront view logic shared by the server and terminal hosts.
//!
//! Everything here is host-agnostic: view models are plain serializable
//! records, and the [`controller::PageSession`] turns input events into
//! effects for the host to apply.

pub mod card;
pub mod collate;
pub mod controller;
pub mod debounce;
pub mod engine;
pub mod grid;
pub mod modal;
pub mod page;
pub mod quote;
pub mod scroll;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use card::{CardAction, CardTarget, MockupLink, ProductCard};
pub use controller::{Effect, PageRequest, PageSession, SessionSettings, UiEvent};
pub use debounce::Debouncer;
pub use grid::{GridView, PageMode};
pub use modal::{DetailModal, ModalTarget, ProductDetail, QuantityInput, SpecRow};
pub use page::{build_page, CampaignHeader, CategoryOption, PageContext, PageView, SortOption};
pub use quote::{compose_message, QuoteComposer, QuoteRequest};
pub use scroll::{ScrollTracker, BACK_TO_TOP_THRESHOLD};
pub use theme::{
    terminal_prefers_dark, FileThemeStore, MemoryThemeStore, ThemeState, ThemeStore,
    ThemeStoreError,
};
