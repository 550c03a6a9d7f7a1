// HTTP response utilities for the JSON API
use crate::application::catalog_service::DraftError;
use crate::domain::lead::LeadError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const DELIVERY_FAILED: &str = "Falha ao enviar";
pub const INVALID_BODY: &str = "Corpo da requisição inválido";
pub const INVALID_QUERY: &str = "Parâmetros de consulta inválidos";

/// `{"ok": false, "error": ...}`, the shape the site's forms expect.
#[derive(Debug, Serialize)]
struct ErrorBody {
    ok: bool,
    error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Upstream(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorBody {
            ok: false,
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<LeadError> for ApiError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::Delivery => ApiError::Upstream(DELIVERY_FAILED),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let response = ApiError::from(LeadError::Delivery).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::from(LeadError::InvalidEmail).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::NotFound("Membro não encontrado").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_delivery_error_hides_cause() {
        let err = ApiError::from(LeadError::Delivery);
        assert_eq!(err.to_string(), DELIVERY_FAILED);
    }

    #[test]
    fn test_validation_messages_are_portuguese() {
        let err = ApiError::from(LeadError::MissingField("email"));
        assert_eq!(err.to_string(), "Campo obrigatório não informado: email");

        let err = ApiError::from(LeadError::InvalidEmail);
        assert_eq!(err.to_string(), "Endereço de email inválido");

        let err = ApiError::from(DraftError::UnknownCompany("9".to_string()));
        assert_eq!(err.to_string(), "Empresa não encontrada: 9");
    }
}
