use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use vitrine_catalog::LoadState;
use vitrine_ui::{engine, ProductCard, QuoteRequest};

use crate::middleware::RequestId;
use crate::query::CatalogQuery;
use crate::state::AppState;

use super::{ApiError, ApiResponse, ResponseMeta};

fn upstream_error(request_id: String, reason: &str) -> ApiError {
    tracing::error!(reason, "product list unavailable");
    ApiError::new(request_id, "upstream_unavailable", "product list unavailable")
}

/// Filtered, sorted card view models; same parameters as the catalog page.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ApiResponse<Vec<ProductCard>>>, ApiError> {
    let products = match state.catalog.load_products().await {
        LoadState::Loaded(products) => products,
        LoadState::LoadFailed(reason) => return Err(upstream_error(req_id.0, &reason)),
        LoadState::Loading => return Err(upstream_error(req_id.0, "still loading")),
    };

    let data = engine::apply(&products, &query.filters())
        .into_iter()
        .map(ProductCard::render)
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct QuoteQuery {
    pub quantity: Option<String>,
}

pub(super) async fn product_quote(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<u64>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<ApiResponse<QuoteRequest>>, ApiError> {
    let load = state.catalog.load_products().await;
    if let LoadState::LoadFailed(reason) = &load {
        return Err(upstream_error(req_id.0, reason));
    }
    let Some(product) = load.find(id) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("product {id} not found"),
        ));
    };

    let data = state
        .composer
        .compose(product, query.quantity.as_deref().unwrap_or("1"));

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
