//! Integration tests for `CatalogClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use vitrine_catalog::{CatalogClient, CatalogError, LoadState};

/// Matches requests that carry the cache-busting `v` query parameter.
struct HasCacheBuster;

impl Match for HasCacheBuster {
    fn matches(&self, request: &Request) -> bool {
        request
            .url
            .query_pairs()
            .any(|(k, v)| k == "v" && !v.is_empty() && v.chars().all(|c| c.is_ascii_digit()))
    }
}

fn test_client(base: &str) -> CatalogClient {
    CatalogClient::new(5, "vitrine-test/0.1", base, None).expect("failed to build test client")
}

fn products_json() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "nome": "Caneca Azul",
            "categoria": "sublimacao",
            "preco": 20,
            "estoque": 3,
            "emPromocao": false,
            "imagem": "img/1.jpg",
            "descricao": "Caneca de porcelana",
            "especificacoes": { "material": "Porcelana", "cores": ["Azul"], "tamanhos": [] },
            "campanhas": ["natal"]
        },
        {
            "id": 2,
            "nome": "Caneca Rosa",
            "categoria": "sublimacao",
            "preco": 15.5,
            "estoque": 0,
            "emPromocao": true,
            "imagem": "img/2.jpg",
            "descricao": "Caneca rosa",
            "especificacoes": { "cores": [], "tamanhos": [] },
            "campanhas": []
        }
    ])
}

// ---------------------------------------------------------------------------
// Product list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_products_sends_cache_buster_and_parses_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalogo/data.json"))
        .and(HasCacheBuster)
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/catalogo", server.uri()));
    let products = client.fetch_products().await.expect("products");

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Caneca Azul");
    assert!(products[1].on_promotion);
}

#[tokio::test]
async fn fetch_products_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).fetch_products().await;
    assert!(
        matches!(result, Err(CatalogError::NotFound { .. })),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_products_maps_500_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).fetch_products().await;
    assert!(
        matches!(result, Err(CatalogError::UnexpectedStatus { status: 500, .. })),
        "expected UnexpectedStatus(500), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_products_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).fetch_products().await;
    assert!(
        matches!(result, Err(CatalogError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn load_products_reports_failure_as_load_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let state = test_client(&server.uri()).load_products().await;
    assert!(matches!(state, LoadState::LoadFailed(ref reason) if reason.contains("503")));
    assert!(state.products().is_empty());
}

#[tokio::test]
async fn every_load_is_a_fresh_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .and(HasCacheBuster)
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json()))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let first = client.load_products().await;
    let second = client.load_products().await;
    assert_eq!(first.products().len(), 2);
    assert_eq!(second.products().len(), 2);
}

// ---------------------------------------------------------------------------
// Campaign metadata
// ---------------------------------------------------------------------------

#[tokio::test]
async fn load_campaigns_reads_site_root() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaigns.json"))
        .and(HasCacheBuster)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "natal": { "title": "Especial de Natal", "description": "Natal!" },
            "default": { "title": "Campanha Especial", "description": "Genérico" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/catalogo/", server.uri()));
    let campaigns = client.load_campaigns().await;
    assert_eq!(campaigns.len(), 2);
    assert_eq!(campaigns.resolve("natal").title, "Especial de Natal");
}

#[tokio::test]
async fn load_campaigns_falls_back_on_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaigns.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let campaigns = test_client(&server.uri()).load_campaigns().await;
    assert_eq!(campaigns.len(), 1);
    assert_eq!(campaigns.resolve("natal").title, "Campanha Especial");
    assert_eq!(
        campaigns.resolve("natal").description,
        "Produtos selecionados especialmente para você."
    );
}

#[tokio::test]
async fn fetch_campaigns_surfaces_parse_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaigns.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "a", "map"])))
        .mount(&server)
        .await;

    let result = test_client(&server.uri()).fetch_campaigns().await;
    assert!(matches!(result, Err(CatalogError::Deserialize { .. })));
}
