use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::{UserGenerator, UserStore};

/// Estado do serviço mock, incluindo o tamanho atual do store
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub users_in_store: usize,
    pub max_generation_count: u32,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(
    store: web::Data<UserStore>,
    generator: web::Data<UserGenerator>,
) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users_in_store: store.len(),
        max_generation_count: generator.limits().max_count,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
