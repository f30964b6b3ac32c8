use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mock Users API",
        version = "1.0.0",
        description = "In-memory mock REST API for user records.\n\n**Features:**\n- CRUD over an in-memory user store\n- Random user generation bounded by configured default/max counts\n- Health monitoring and metrics"
    ),
    paths(
        // Users
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
        crate::api::users::generate_users,
        crate::api::users::get_generation_config,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            // Users
            crate::models::User,
            crate::models::UserPayload,
            crate::api::users::GenerationConfigResponse,

            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "User CRUD and random user generation."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_paths() {
        let doc = ApiDoc::openapi();

        for path in ["/api/users", "/api/users/{id}", "/api/users/generate", "/api/users/config"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
