use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const INVALID_PHONE_MESSAGE: &str = "Número de telefone inválido";
pub const MISSING_PHONE_FIELD_MESSAGE: &str = "Campo 'phone' é obrigatório";
pub const NOT_FOUND_MESSAGE: &str = "Endpoint não encontrado";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido";
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Errors surfaced by the phone API. Every variant renders as a JSON body
/// with an `erro` field.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The input could not be normalized into a phone number.
    #[error("Invalid phone number: {received}")]
    InvalidPhoneNumber { received: String },
    /// The POST body has no usable `phone` field.
    #[error("Missing 'phone' field")]
    MissingPhoneField,
    /// No route matched the request.
    #[error("No route for {0}")]
    NotFound(String),
    /// The path exists but not for this method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
    /// Anything unexpected. The detail is logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidPhoneNumber { received } => (
                StatusCode::BAD_REQUEST,
                json!({ "erro": INVALID_PHONE_MESSAGE, "numero_recebido": received }),
            ),
            ApiError::MissingPhoneField => (
                StatusCode::BAD_REQUEST,
                json!({ "erro": MISSING_PHONE_FIELD_MESSAGE }),
            ),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "erro": NOT_FOUND_MESSAGE, "use": "/ para documentação" }),
            ),
            ApiError::MethodNotAllowed(_) => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "erro": METHOD_NOT_ALLOWED_MESSAGE, "use": "/ para documentação" }),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "erro": INTERNAL_ERROR_MESSAGE }),
            ),
        };

        if status.is_server_error() {
            log::error!("ApiError: status={}, error={}", status, self);
        } else {
            log::warn!("ApiError: status={}, error={}", status, self);
        }

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
