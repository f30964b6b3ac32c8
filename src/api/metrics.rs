use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::services::UserStore;

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn increment_request_count() {
    REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
}

pub fn increment_error_count() {
    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MetricsResponse {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub mock_users_total: u64,
}

impl MetricsResponse {
    pub fn snapshot(store: &UserStore) -> Self {
        Self {
            http_requests_total: REQUEST_COUNT.load(Ordering::Relaxed),
            http_errors_total: ERROR_COUNT.load(Ordering::Relaxed),
            mock_users_total: store.len() as u64,
        }
    }

    fn to_prometheus(&self) -> String {
        format!(
            "# HELP http_requests_total Total number of HTTP requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total {}\n\
             \n\
             # HELP http_errors_total Total number of HTTP errors\n\
             # TYPE http_errors_total counter\n\
             http_errors_total {}\n\
             \n\
             # HELP mock_users_total Users currently held in the store\n\
             # TYPE mock_users_total gauge\n\
             mock_users_total {}\n",
            self.http_requests_total, self.http_errors_total, self.mock_users_total
        )
    }
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "System metrics (Prometheus text format)", body = MetricsResponse)
    )
)]
pub async fn get_metrics(store: web::Data<UserStore>) -> HttpResponse {
    let metrics = MetricsResponse::snapshot(&store);

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(metrics.to_prometheus())
}
