//! Event-driven page session: one per page view.
//!
//! A host feeds [`UiEvent`]s through a single unbounded queue and applies the
//! returned [`Effect`]s in order. The debounced search task posts back into
//! the same queue, so every state change is handled one at a time.

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedSender, WeakUnboundedSender};
use vitrine_catalog::{CatalogClient, LoadState};
use vitrine_core::{AppConfig, CategoryFilter, FilterState, SortMode, Theme};

use crate::card::{CardAction, CardTarget, ProductCard};
use crate::debounce::Debouncer;
use crate::grid::{GridView, PageMode};
use crate::modal::{DetailModal, ModalTarget, ProductDetail};
use crate::page::{build_page, PageContext, PageView};
use crate::quote::QuoteComposer;
use crate::scroll::ScrollTracker;
use crate::theme::{ThemeState, ThemeStore};

/// Which page the session is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    Catalog,
    /// Campaign id from the `id` query parameter, if any.
    Campaign { id: Option<String> },
}

/// Settings fixed for the lifetime of a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub store_name: String,
    pub whatsapp_number: String,
    pub search_debounce: Duration,
}

impl SessionSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            store_name: config.store_name.clone(),
            whatsapp_number: config.whatsapp_number.clone(),
            search_debounce: Duration::from_millis(config.search_debounce_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// A keystroke in the search box. The term is recorded at once; the grid
    /// re-filters once typing settles.
    SearchInput(String),
    /// Posted by the debouncer when typing has settled.
    SearchSettled,
    CategorySelected(String),
    PromoToggled(bool),
    SortSelected(SortMode),
    CardClicked { id: u64, target: CardTarget },
    ModalClicked(ModalTarget),
    KeyPressed(String),
    QuantityChanged(String),
    QuoteRequested,
    ThemeToggled,
    Scrolled(f64),
    BackToTopClicked,
}

/// What the host must do in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show the transitional state before the next [`Effect::Grid`].
    Reloading,
    Grid(GridView),
    ModalOpened(ProductDetail),
    ModalClosed,
    /// Open `url` in a new browsing context.
    OpenLink(String),
    ThemeApplied(Theme),
    BackToTopVisible(bool),
    ScrollToTop,
}

pub struct PageSession<S: ThemeStore> {
    mode: PageMode,
    settings: SessionSettings,
    load: LoadState,
    filters: FilterState,
    theme: ThemeState<S>,
    modal: DetailModal,
    scroll: ScrollTracker,
    composer: QuoteComposer,
    debouncer: Debouncer,
    events: WeakUnboundedSender<UiEvent>,
}

impl<S: ThemeStore> PageSession<S> {
    /// Starts a page view: theme first, then campaign header text (campaign
    /// pages only), then the product list.
    ///
    /// The session keeps only a weak handle to `events`; once every strong
    /// sender is gone, pending debounced searches are dropped.
    pub async fn bootstrap(
        client: &CatalogClient,
        request: PageRequest,
        settings: SessionSettings,
        theme_store: S,
        prefers_dark: bool,
        events: &UnboundedSender<UiEvent>,
    ) -> Self {
        let theme = ThemeState::initialize(theme_store, prefers_dark);

        let mode = match request {
            PageRequest::Catalog => PageMode::Catalog,
            PageRequest::Campaign { id } => {
                let campaigns = client.load_campaigns().await;
                PageMode::campaign(id.as_deref(), &campaigns)
            }
        };

        let load = client.load_products().await;
        tracing::info!(
            products = load.products().len(),
            failed = load.is_failed(),
            theme = %theme.current(),
            "page session started"
        );

        Self::assemble(mode, load, theme, settings, events)
    }

    fn assemble(
        mode: PageMode,
        load: LoadState,
        theme: ThemeState<S>,
        settings: SessionSettings,
        events: &UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            composer: QuoteComposer::new(settings.whatsapp_number.clone()),
            debouncer: Debouncer::new(settings.search_debounce),
            mode,
            settings,
            load,
            filters: FilterState::default(),
            theme,
            modal: DetailModal::default(),
            scroll: ScrollTracker::default(),
            events: events.downgrade(),
        }
    }

    /// The full page as currently shown.
    #[must_use]
    pub fn page(&self) -> PageView {
        build_page(
            PageContext {
                mode: &self.mode,
                store_name: &self.settings.store_name,
                theme: self.theme.current(),
            },
            &self.load,
            &self.filters,
            self.modal.content(),
        )
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub fn mode(&self) -> &PageMode {
        &self.mode
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeState<S> {
        &self.theme
    }

    #[must_use]
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Handles one event. Must be called from within a Tokio runtime.
    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::SearchInput(term) => {
                if self.is_catalog() {
                    self.filters.search_term = term;
                    self.schedule_search();
                }
                Vec::new()
            }
            UiEvent::SearchSettled => {
                tracing::debug!(term = %self.filters.search_term, "search settled");
                self.refilter(|_| {})
            }
            UiEvent::CategorySelected(value) => {
                self.refilter(|f| f.category = CategoryFilter::from_option(&value))
            }
            UiEvent::PromoToggled(on) => self.refilter(|f| f.promo_only = on),
            UiEvent::SortSelected(sort) => self.refilter(|f| f.sort = sort),
            UiEvent::CardClicked { id, target } => self.click_card(id, target),
            UiEvent::ModalClicked(target) => closed(self.modal.handle_click(target)),
            UiEvent::KeyPressed(key) => closed(self.modal.handle_key(&key)),
            UiEvent::QuantityChanged(raw) => {
                if self.modal.is_open() {
                    self.modal.set_quantity(raw);
                }
                Vec::new()
            }
            UiEvent::QuoteRequested => self.request_quote(),
            UiEvent::ThemeToggled => vec![Effect::ThemeApplied(self.theme.toggle())],
            UiEvent::Scrolled(offset) => visibility(self.scroll.on_scroll(offset)),
            UiEvent::BackToTopClicked => {
                let mut effects = vec![Effect::ScrollToTop];
                effects.extend(visibility(self.scroll.scroll_to_top()));
                effects
            }
        }
    }

    fn is_catalog(&self) -> bool {
        matches!(self.mode, PageMode::Catalog)
    }

    fn schedule_search(&mut self) {
        let events = self.events.clone();
        self.debouncer.schedule(async move {
            if let Some(tx) = events.upgrade() {
                let _ = tx.send(UiEvent::SearchSettled);
            }
        });
    }

    /// Campaign pages have no filter controls, so filter events are ignored
    /// there.
    fn refilter(&mut self, update: impl FnOnce(&mut FilterState)) -> Vec<Effect> {
        if !self.is_catalog() {
            return Vec::new();
        }
        update(&mut self.filters);
        let grid = GridView::build(&self.load, &self.mode, &self.filters);
        tracing::debug!(shown = grid.cards().len(), "grid re-filtered");
        vec![Effect::Reloading, Effect::Grid(grid)]
    }

    fn click_card(&mut self, id: u64, target: CardTarget) -> Vec<Effect> {
        let Some(product) = self.load.find(id) else {
            tracing::debug!(id, "click on unknown product ignored");
            return Vec::new();
        };
        match ProductCard::render(product).click(target) {
            CardAction::OpenMockups(url) => vec![Effect::OpenLink(url)],
            CardAction::OpenDetail(_) => {
                let detail = self.modal.open(product).clone();
                vec![Effect::ModalOpened(detail)]
            }
        }
    }

    fn request_quote(&self) -> Vec<Effect> {
        let Some(detail) = self.modal.content() else {
            return Vec::new();
        };
        match self.load.find(detail.id) {
            Some(product) => {
                let quote = self.composer.compose(product, self.modal.quantity());
                vec![Effect::OpenLink(quote.url)]
            }
            None => {
                tracing::warn!(id = detail.id, "quote requested for product not in list");
                Vec::new()
            }
        }
    }
}

fn closed(did_close: bool) -> Vec<Effect> {
    if did_close {
        vec![Effect::ModalClosed]
    } else {
        Vec::new()
    }
}

fn visibility(change: Option<bool>) -> Vec<Effect> {
    change.map(Effect::BackToTopVisible).into_iter().collect()
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
