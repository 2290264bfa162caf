//! Mock storefront and request helpers for router tests.

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;
use vitrine_catalog::CatalogClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api::build_app;
use crate::state::AppState;

pub(crate) const PHONE: &str = "5511999999999";

pub(crate) fn products_json() -> serde_json::Value {
    json!([
        {
            "id": 1, "nome": "Caneca Azul", "categoria": "sublimacao", "preco": 20,
            "estoque": 5, "emPromocao": false, "imagem": "img/1.jpg",
            "linkMockups": "https://drive.example.com/azul",
            "descricao": "Caneca de porcelana",
            "especificacoes": { "material": "Porcelana", "cores": ["Azul", "Branco"], "tamanhos": [] },
            "campanhas": ["natal"]
        },
        {
            "id": 2, "nome": "Caneca Rosa", "categoria": "sublimacao", "preco": 15,
            "estoque": 0, "emPromocao": true, "imagem": "img/2.jpg",
            "descricao": "", "campanhas": []
        },
        {
            "id": 3, "nome": "Caderno", "categoria": "outros", "preco": 10,
            "emPromocao": true, "imagem": "img/3.jpg", "descricao": "Capa dura",
            "campanhas": ["volta-as-aulas"]
        }
    ])
}

/// Storefront serving `data.json` and `campaigns.json` at its root.
pub(crate) async fn storefront() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/campaigns.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "default": { "title": "Ofertas", "description": "Seleção da semana." },
            "natal": { "title": "Especial de Natal", "description": "" }
        })))
        .mount(&server)
        .await;
    server
}

/// Storefront whose product list always fails.
pub(crate) async fn broken_storefront() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    server
}

pub(crate) fn app_for(server: &MockServer) -> Router {
    let client = CatalogClient::new(5, "vitrine-test/0.1", &server.uri(), None)
        .expect("test client");
    build_app(AppState::new(client, PHONE, "Loja Teste"))
}

pub(crate) struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub(crate) fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("json body")
    }
}

pub(crate) async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
    }
}

pub(crate) async fn get(app: Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
}
