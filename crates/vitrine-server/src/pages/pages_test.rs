use axum::body::Body;
use axum::http::{header, Request, StatusCode};

use super::*;
use crate::test_support::{app_for, broken_storefront, get, send, storefront};

#[test]
fn back_location_keeps_same_site_path_only() {
    let mut headers = HeaderMap::new();
    assert_eq!(back_location(&headers), "/");

    headers.insert(
        header::REFERER,
        HeaderValue::from_static("https://evil.example.com/campanha?id=natal"),
    );
    assert_eq!(back_location(&headers), "/campanha?id=natal");

    headers.insert(header::REFERER, HeaderValue::from_static("//evil.example.com"));
    assert_eq!(back_location(&headers), "/");
}

#[tokio::test]
async fn catalog_page_renders_cards_and_filters() {
    let server = storefront().await;
    let res = get(app_for(&server), "/?categoria=sublimacao").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.headers.contains_key("x-request-id"));
    let html = &res.body;
    assert!(html.contains("<title>Loja Teste</title>"));
    assert!(html.contains("data-theme=\"light\""));
    assert!(html.contains("Caneca Azul"));
    assert!(html.contains("Caneca Rosa"));
    assert!(!html.contains("Caderno</h3>"));
    assert!(html.contains("<option value=\"sublimacao\" selected>Sublimacao</option>"));
    assert!(html.contains("R$ 20,00"));
    assert!(html.contains("<span class=\"promo-badge\">OFERTA</span>"));
    assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\">Ver mais mockups</a>"));
    assert!(html.contains("loading=\"lazy\""));
}

#[tokio::test]
async fn catalog_page_shows_empty_message() {
    let server = storefront().await;
    let res = get(app_for(&server), "/?busca=inexistente").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res
        .body
        .contains("Nenhum produto encontrado com os filtros selecionados."));
}

#[tokio::test]
async fn catalog_page_shows_load_failure_without_cards() {
    let server = broken_storefront().await;
    let res = get(app_for(&server), "/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res
        .body
        .contains("<p class=\"error\">Erro ao carregar produtos. Tente recarregar a página.</p>"));
    assert!(!res.body.contains("product-card"));
}

#[tokio::test]
async fn produto_param_opens_detail_modal() {
    let server = storefront().await;
    let res = get(app_for(&server), "/?produto=1").await;

    let html = &res.body;
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("Estoque: 5 unidades"));
    assert!(html.contains("<th>Material</th><td>Porcelana</td>"));
    assert!(html.contains("<th>Cores</th><td>Azul, Branco</td>"));
    assert!(!html.contains("<th>Tamanhos</th>"));
    assert!(html.contains("min=\"1\" max=\"5\""));
    assert!(html.contains("action=\"/produto/1/orcamento\""));
    assert!(html.contains("data-close-href=\"/\""));
    assert!(html.contains("e.key === \"Escape\""));
}

#[tokio::test]
async fn back_to_top_is_hidden_until_scrolled_past_threshold() {
    let server = storefront().await;
    let html = get(app_for(&server), "/").await.body;
    assert!(html.contains("class=\"back-to-top\" href=\"#topo\" data-threshold=\"100\""));
    assert!(html.contains("window.scrollY > threshold"));
    assert!(html.contains("behavior: \"smooth\""));

    let css = get(app_for(&server), "/static/style.css").await;
    assert_eq!(css.headers[header::CONTENT_TYPE], "text/css; charset=utf-8");
    assert!(css.body.contains("html { scroll-behavior: smooth; }"));
    assert!(css
        .body
        .contains(".back-to-top { position: fixed; right: 1.5rem; bottom: 1.5rem; display: none; }"));
    assert!(css.body.contains(".back-to-top.visible { display: block; }"));
}

#[tokio::test]
async fn zero_stock_modal_is_on_request_with_max_one() {
    let server = storefront().await;
    let res = get(app_for(&server), "/?produto=2").await;

    assert!(res.body.contains("Estoque: Sob consulta"));
    assert!(res.body.contains("min=\"1\" max=\"1\""));
    assert!(!res.body.contains("class=\"specs\""));
}

#[tokio::test]
async fn campaign_page_uses_metadata_and_membership() {
    let server = storefront().await;
    let res = get(app_for(&server), "/campanha?id=natal").await;

    let html = &res.body;
    assert!(html.contains("<title>Especial de Natal - Loja Teste</title>"));
    assert!(html.contains("<h1>Especial de Natal</h1>"));
    assert!(html.contains("Caneca Azul"));
    assert!(!html.contains("Caderno</h3>"));
    assert!(!html.contains("class=\"filters\""));
    assert!(html.contains("href=\"/campanha?id=natal&amp;produto=1\""));
}

#[tokio::test]
async fn unknown_campaign_falls_back_to_default_entry() {
    let server = storefront().await;
    let res = get(app_for(&server), "/campanha?id=xyz").await;

    let html = &res.body;
    assert!(html.contains("<h1>Ofertas</h1>"));
    assert!(html.contains("<p>Seleção da semana.</p>"));
    assert!(html.contains("Nenhum produto encontrado para esta campanha no momento."));
}

#[tokio::test]
async fn quote_route_redirects_to_whatsapp() {
    let server = storefront().await;
    let res = get(app_for(&server), "/produto/3/orcamento?quantidade=2").await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    let location = res.headers[header::LOCATION].to_str().expect("ascii");
    assert!(location.starts_with("https://wa.me/5511999999999?text="));
    assert!(location.contains("*2%20unidade(s)*"));
    assert!(location.contains("(ID%3A%203)"));
}

#[tokio::test]
async fn quote_route_unknown_product_is_not_found() {
    let server = storefront().await;
    let res = send(
        app_for(&server),
        Request::builder()
            .uri("/produto/99/orcamento")
            .header(header::COOKIE, "theme=dark")
            .body(Body::empty())
            .expect("request"),
    )
    .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    let html = &res.body;
    assert!(html.contains("data-theme=\"dark\""));
    assert!(html.contains("<title>Produto não encontrado - Loja Teste</title>"));
    assert!(html.contains("<a class=\"brand\" href=\"/\">Loja Teste</a>"));
}

#[tokio::test]
async fn quote_route_when_catalog_is_down_is_bad_gateway() {
    let server = broken_storefront().await;
    let res = get(app_for(&server), "/produto/1/orcamento").await;

    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert!(res.body.contains("data-theme=\"light\""));
    assert!(res.body.contains("Loja Teste"));
}

#[tokio::test]
async fn theme_toggle_sets_cookie_and_redirects_back() {
    let server = storefront().await;
    let res = send(
        app_for(&server),
        Request::builder()
            .method("POST")
            .uri("/tema")
            .header(header::COOKIE, "theme=light")
            .header(header::REFERER, "http://localhost:3000/?busca=caneca")
            .body(Body::empty())
            .expect("request"),
    )
    .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.headers[header::LOCATION], "/?busca=caneca");
    assert_eq!(
        res.headers[header::SET_COOKIE],
        "theme=dark; Max-Age=31536000; Path=/; SameSite=Lax"
    );
}

#[tokio::test]
async fn dark_cookie_renders_dark_page() {
    let server = storefront().await;
    let res = send(
        app_for(&server),
        Request::builder()
            .uri("/")
            .header(header::COOKIE, "theme=dark")
            .body(Body::empty())
            .expect("request"),
    )
    .await;

    assert!(res.body.contains("data-theme=\"dark\""));
    assert_eq!(res.headers[header::VARY], "Cookie, Sec-CH-Prefers-Color-Scheme");
}
