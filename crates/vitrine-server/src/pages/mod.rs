//! Server-rendered storefront pages.
//!
//! Each request is one page view: the product list (and, on campaign pages,
//! the campaign metadata) is loaded fresh, filtered, and rendered. The
//! detail modal is opened by the `produto` query parameter.

pub mod theme;

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use vitrine_catalog::LoadState;
use vitrine_core::{FilterState, Theme};
use vitrine_ui::{
    build_page, GridView, PageContext, PageMode, PageView, ProductCard, ProductDetail,
};

use crate::query::{CampaignQuery, CatalogQuery};
use crate::state::AppState;
use self::theme::{request_theme, CLIENT_HINT};

const STYLESHEET: &str = include_str!("../../static/style.css");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog_page))
        .route("/campanha", get(campaign_page))
        .route("/produto/{id}/orcamento", get(quote_redirect))
        .route("/tema", post(toggle_theme))
        .route("/static/style.css", get(stylesheet))
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    theme: &'static str,
    store_name: &'a str,
    page: &'a PageView,
    is_catalog: bool,
    loading: bool,
    notice: Option<Notice>,
    cards: Vec<CardEntry<'a>>,
    modal: Option<ModalEntry<'a>>,
}

struct Notice {
    class: &'static str,
    message: &'static str,
}

struct CardEntry<'a> {
    card: &'a ProductCard,
    detail_href: String,
}

struct ModalEntry<'a> {
    detail: &'a ProductDetail,
    close_href: String,
    quote_action: String,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    title: &'a str,
    theme: &'static str,
    store_name: &'a str,
    heading: &'a str,
    message: &'a str,
}

impl<'a> PageTemplate<'a> {
    fn new(
        page: &'a PageView,
        store_name: &'a str,
        href: impl Fn(Option<u64>) -> String,
    ) -> Self {
        let notice = match &page.grid {
            GridView::Empty { message } => Some(Notice {
                class: "info",
                message: *message,
            }),
            GridView::Failed { message } => Some(Notice {
                class: "error",
                message: *message,
            }),
            GridView::Loading | GridView::Cards { .. } => None,
        };
        let cards = page
            .grid
            .cards()
            .iter()
            .map(|card| CardEntry {
                card,
                detail_href: href(Some(card.id)),
            })
            .collect();
        let modal = page.modal.as_ref().map(|detail| ModalEntry {
            detail,
            close_href: href(None),
            quote_action: format!("/produto/{}/orcamento", detail.id),
        });

        Self {
            title: &page.document_title,
            theme: page.theme.as_str(),
            store_name,
            page,
            is_catalog: page.header.is_none(),
            loading: matches!(page.grid, GridView::Loading),
            notice,
            cards,
            modal,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum PageError {
    NotFound,
    /// The product list could not be loaded for a quote.
    Upstream,
    Render(askama::Error),
}

impl PageError {
    /// Attaches the store name and theme the error page is drawn with.
    fn within(self, store_name: &Arc<str>, theme: Theme) -> ErrorPage {
        ErrorPage {
            error: self,
            store_name: Arc::clone(store_name),
            theme,
        }
    }
}

/// A [`PageError`] rendered in the requesting visitor's theme.
#[derive(Debug)]
pub struct ErrorPage {
    error: PageError,
    store_name: Arc<str>,
    theme: Theme,
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let (status, heading, message) = match &self.error {
            PageError::NotFound => (
                StatusCode::NOT_FOUND,
                "Produto não encontrado",
                "O produto solicitado não está no catálogo.",
            ),
            PageError::Upstream => (
                StatusCode::BAD_GATEWAY,
                "Catálogo indisponível",
                "Erro ao carregar produtos. Tente recarregar a página.",
            ),
            PageError::Render(e) => {
                tracing::error!(error = %e, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro interno",
                    "Não foi possível exibir esta página.",
                )
            }
        };
        let title = format!("{heading} - {}", self.store_name);
        let body = ErrorTemplate {
            title: &title,
            theme: self.theme.as_str(),
            store_name: &self.store_name,
            heading,
            message,
        }
        .render()
        .unwrap_or_else(|_| message.to_owned());
        (status, Html(body)).into_response()
    }
}

/// Renders `t` as an HTML response that varies on the theme inputs.
fn render_template(t: &impl Template) -> Result<Response, PageError> {
    let body = t.render().map_err(PageError::Render)?;
    let mut res = Html(body).into_response();
    let headers = res.headers_mut();
    headers.insert(
        header::VARY,
        HeaderValue::from_static("Cookie, Sec-CH-Prefers-Color-Scheme"),
    );
    headers.insert("accept-ch", HeaderValue::from_static(CLIENT_HINT));
    Ok(res)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn catalog_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CatalogQuery>,
) -> Result<Response, ErrorPage> {
    let theme = request_theme(&headers);
    let load = state.catalog.load_products().await;
    let filters = query.filters();
    let modal = open_modal(&load, query.product_id());

    let page = build_page(
        PageContext {
            mode: &PageMode::Catalog,
            store_name: &state.store_name,
            theme: theme.current(),
        },
        &load,
        &filters,
        modal.as_ref(),
    );
    render_template(&PageTemplate::new(&page, &state.store_name, |id| {
        query.href(id)
    }))
    .map_err(|e| e.within(&state.store_name, theme.current()))
}

async fn campaign_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CampaignQuery>,
) -> Result<Response, ErrorPage> {
    let theme = request_theme(&headers);
    let campaigns = state.catalog.load_campaigns().await;
    let mode = PageMode::campaign(query.id.as_deref(), &campaigns);
    let load = state.catalog.load_products().await;
    let modal = open_modal(&load, query.product_id());

    let page = build_page(
        PageContext {
            mode: &mode,
            store_name: &state.store_name,
            theme: theme.current(),
        },
        &load,
        &FilterState::default(),
        modal.as_ref(),
    );
    let campaign_id = match &mode {
        PageMode::Campaign { id, .. } => id.as_str(),
        PageMode::Catalog => vitrine_core::DEFAULT_CAMPAIGN_ID,
    };
    render_template(&PageTemplate::new(&page, &state.store_name, |id| {
        query.href(campaign_id, id)
    }))
    .map_err(|e| e.within(&state.store_name, theme.current()))
}

fn open_modal(load: &LoadState, id: Option<u64>) -> Option<ProductDetail> {
    let id = id?;
    let detail = load.find(id).map(ProductDetail::render);
    if detail.is_none() {
        tracing::debug!(id, "detail requested for product not in list");
    }
    detail
}

#[derive(Debug, Default, Deserialize)]
struct QuoteQuery {
    quantidade: Option<String>,
}

async fn quote_redirect(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Query(query): Query<QuoteQuery>,
) -> Result<Redirect, ErrorPage> {
    let failed =
        |error: PageError| error.within(&state.store_name, request_theme(&headers).current());
    let load = state.catalog.load_products().await;
    if load.is_failed() {
        return Err(failed(PageError::Upstream));
    }
    let product = load.find(id).ok_or_else(|| failed(PageError::NotFound))?;
    let quantity = query.quantidade.as_deref().unwrap_or("1");
    let quote = state.composer.compose(product, quantity);
    Ok(Redirect::to(&quote.url))
}

async fn toggle_theme(headers: HeaderMap) -> Response {
    let mut theme = request_theme(&headers);
    let applied = theme.toggle();
    tracing::debug!(theme = %applied, "theme toggled");

    let mut res = Redirect::to(&back_location(&headers)).into_response();
    if let Some(cookie) = theme.store().set_cookie() {
        res.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    res
}

/// Same-site path of the `Referer`, else `/`.
fn back_location(headers: &HeaderMap) -> String {
    let Some(referer) = headers.get(header::REFERER).and_then(|v| v.to_str().ok()) else {
        return "/".to_owned();
    };
    match reqwest::Url::parse(referer) {
        Ok(url) => match url.query() {
            Some(q) => format!("{}?{q}", url.path()),
            None => url.path().to_owned(),
        },
        Err(_) if referer.starts_with('/') && !referer.starts_with("//") => referer.to_owned(),
        Err(_) => "/".to_owned(),
    }
}

async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
