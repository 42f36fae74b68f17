use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::http::{router::with_middleware, routes};

use super::init_logger;

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    init_logger();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(routes(), request).await
}

async fn post_phone(content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut request = Request::builder().method(Method::POST).uri("/api/phone");
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    send(routes(), request.body(Body::from(body.to_owned())).unwrap()).await
}

#[tokio::test]
async fn index_describes_the_api() {
    let (status, body) = get_json("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nome"], "PhoneOsint API");
    assert_eq!(body["versao"], env!("CARGO_PKG_VERSION"));
    assert!(body["endpoints"]["GET /health"].is_string());
    assert_eq!(body["exemplos"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "servico": "PhoneOsint API" }));
}

#[tokio::test]
async fn get_classifies_brazilian_number() {
    let (status, body) = get_json("/api/phone/+5511999999999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valido"], true);
    assert_eq!(body["pais"], "Brasil");
    assert_eq!(body["numero"], "+5511999999999");
    assert_eq!(body["formatado"], "+5511999999999");
    assert_eq!(body["operadora"], "Vivo");

    let location = body["localizacao"].as_str().unwrap();
    assert!(location.contains("11"));
    assert!(location.contains("São Paulo"));
}

#[tokio::test]
async fn get_decodes_the_path() {
    let (status, body) = get_json("/api/phone/(11)%2099999-9999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numero_original"], "(11) 99999-9999");
    assert_eq!(body["numero"], "+5511999999999");

    // encoded twice
    let (status, body) = get_json("/api/phone/%252B44%25202079460000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numero_original"], "+44 2079460000");
    assert_eq!(body["pais"], "Reino Unido");
    assert_eq!(body["localizacao"], Value::Null);
}

#[tokio::test]
async fn get_rejects_invalid_number() {
    let (status, body) = get_json("/api/phone/123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "erro": "Número de telefone inválido", "numero_recebido": "123" })
    );
}

#[tokio::test]
async fn get_rejects_path_that_is_not_utf8() {
    let (status, body) = get_json("/api/phone/%FF%FE").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "erro": "Número de telefone inválido", "numero_recebido": "%FF%FE" })
    );
}

#[tokio::test]
async fn post_json_body() {
    let (status, body) =
        post_phone(Some("application/json"), r#"{"phone": "(21) 93123-4567"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numero"], "+5521931234567");
    assert_eq!(body["operadora"], "TIM");
    assert_eq!(body["localizacao"], "DDD 21 - Rio de Janeiro/RJ");

    // no content type at all
    let (status, body) = post_phone(None, r#"{"phone": "+16502530000"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pais"], "Estados Unidos/Canadá");
    assert_eq!(body["operadora"], Value::Null);
}

#[tokio::test]
async fn post_form_body() {
    let (status, body) = post_phone(
        Some("application/x-www-form-urlencoded"),
        "phone=%2B5585885123456",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["numero_original"], "+5585885123456");
    assert_eq!(body["operadora"], "Oi");
}

#[tokio::test]
async fn post_without_phone_field() {
    let expected = json!({ "erro": "Campo 'phone' é obrigatório" });
    let cases = [
        (Some("application/json"), "{}"),
        (Some("application/json"), r#"{"phone": null}"#),
        (Some("application/json"), r#"{"phone": 5511999999999}"#),
        (Some("application/json"), "not json"),
        (None, ""),
        (Some("application/x-www-form-urlencoded"), "number=11999999999"),
    ];
    for (content_type, payload) in cases {
        let (status, body) = post_phone(content_type, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body, expected, "{payload}");
    }
}

#[tokio::test]
async fn post_rejects_invalid_number() {
    let (status, body) = post_phone(Some("application/json"), r#"{"phone": "12-34"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "erro": "Número de telefone inválido", "numero_recebido": "12-34" })
    );
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, body) = get_json("/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["erro"], "Endpoint não encontrado");
    assert_eq!(body["use"], "/ para documentação");
}

#[tokio::test]
async fn wrong_method_is_405_with_json_body() {
    let (status, body) = get_json("/api/phone").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["erro"], "Método não permitido");

    let request = Request::post("/health").body(Body::empty()).unwrap();
    let (status, body) = send(routes(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["erro"], "Método não permitido");
}

async fn exploding_handler() -> &'static str {
    panic!("handler exploded")
}

#[tokio::test]
async fn panics_become_500() {
    let router = with_middleware(Router::new().route("/boom", get(exploding_handler)));
    let request = Request::get("/boom").body(Body::empty()).unwrap();

    let (status, body) = send(router, request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "erro": "Erro interno do servidor" }));
}
