use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Registro ausente (get/update/delete)
    #[error("Not found: {0}")]
    NotFound(String),
    /// Requisição rejeitada pela regra de negócio (ex: count acima do máximo)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // 404 sem corpo, igual ao contrato original da API
            AppError::NotFound(_) => HttpResponse::NotFound().finish(),
            AppError::InvalidRequest(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": msg
            })),
        }
    }
}
