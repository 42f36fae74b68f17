//! Routes of the PhoneOsint API.
//!
//! - `GET /`: API description and examples.
//! - `GET /api/phone/{*phone}`: classifies the number in the path.
//! - `POST /api/phone`: classifies the `phone` field of a JSON or
//!   form-encoded body.
//! - `GET /health`: liveness probe.
//!
//! Unknown paths answer 404, known paths with the wrong method 405.
//! Panics inside handlers answer 500.

use std::any::Any;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, FromRequest, Path, Request},
    http::{header, Method, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
};

use super::errors::{ApiError, ApiResult};
use crate::phoneinfo::{PhoneInfo, PHONE_INFO_UTIL};

pub const SERVICE_NAME: &str = "PhoneOsint API";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const PHONE_PATH_PREFIX: &str = "/api/phone/";

#[derive(Debug, Deserialize)]
struct PhoneRequest {
    phone: Option<String>,
}

/// Builds the full application router, middleware included.
pub fn routes() -> Router {
    with_middleware(api_routes())
}

fn api_routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/phone", post(post_phone))
        .route("/api/phone/{*phone}", get(get_phone))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Wraps a router with panic recovery and permissive CORS.
pub(crate) fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
}

async fn index() -> Json<Value> {
    Json(json!({
        "nome": SERVICE_NAME,
        "versao": env!("CARGO_PKG_VERSION"),
        "autor": "PhoneOsint",
        "endpoints": {
            "GET /": "Esta documentação",
            "GET /api/phone/<numero>": "Consulta informações de um número de telefone",
            "POST /api/phone": "Consulta informações via JSON {\"phone\": \"+5511999999999\"}",
            "GET /health": "Verifica se a API está funcionando"
        },
        "exemplos": [
            "/api/phone/+5511999999999",
            "/api/phone/11999999999",
            "/api/phone/(11) 99999-9999"
        ],
        "formatos_aceitos": [
            "+5511999999999",
            "5511999999999",
            "11999999999",
            "(11) 99999-9999",
            "11 99999-9999"
        ]
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "servico": SERVICE_NAME }))
}

async fn get_phone(
    phone: Result<Path<String>, PathRejection>,
    uri: Uri,
) -> ApiResult<Json<PhoneInfo>> {
    match phone {
        Ok(Path(phone)) => classify(decode_leftover_escapes(&phone)),
        // Not valid UTF-8 once decoded: echo the segment as it was sent.
        Err(rejection) => {
            log::debug!("Rejected phone path {}: {}", uri.path(), rejection);
            let raw = uri
                .path()
                .strip_prefix(PHONE_PATH_PREFIX)
                .unwrap_or(uri.path());
            Err(ApiError::InvalidPhoneNumber {
                received: raw.to_owned(),
            })
        }
    }
}

async fn post_phone(request: Request) -> ApiResult<Json<PhoneInfo>> {
    let phone = extract_phone_field(request)
        .await
        .ok_or(ApiError::MissingPhoneField)?;
    classify(phone)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.to_string())
}

async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} {}", method, uri))
}

fn classify(raw: String) -> ApiResult<Json<PhoneInfo>> {
    let info = PHONE_INFO_UTIL.get_phone_info(&raw);
    if !info.is_valid {
        return Err(ApiError::InvalidPhoneNumber { received: raw });
    }
    log::info!(
        "Classified phone number: number={:?}, country={:?}",
        info.number,
        info.country
    );
    Ok(Json(info))
}

/// The path is already percent-decoded by the extractor. Clients that encode
/// twice still leave `%20` and `%2B` behind, those are decoded here.
fn decode_leftover_escapes(phone: &str) -> String {
    phone.replace("%20", " ").replace("%2B", "+")
}

/// Reads `phone` from a form body when the request says so, from a JSON body
/// otherwise. Returns `None` when the body cannot be read or has no string
/// `phone` field.
async fn extract_phone_field(request: Request) -> Option<String> {
    let is_form = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with(FORM_CONTENT_TYPE));

    let payload = if is_form {
        let Form(payload) = Form::<PhoneRequest>::from_request(request, &()).await.ok()?;
        payload
    } else {
        let body = Bytes::from_request(request, &()).await.ok()?;
        serde_json::from_slice::<PhoneRequest>(&body).ok()?
    };
    payload.phone
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(detail).into_response()
}
