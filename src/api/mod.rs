pub mod health;
pub mod metrics;
pub mod swagger;
pub mod users;

use actix_web::web;

/// Registra as rotas do serviço. Os estados (`UserStore`, `UserGenerator`)
/// são injetados pelo chamador via `app_data`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        .service(
            web::scope("/api/users")
                .route("", web::get().to(users::list_users))
                .route("", web::post().to(users::create_user))
                // Rotas fixas antes do catch-all /{id}
                .route("/config", web::get().to(users::get_generation_config))
                .route("/generate", web::post().to(users::generate_users))
                .route("/{id}", web::get().to(users::get_user))
                .route("/{id}", web::put().to(users::update_user))
                .route("/{id}", web::delete().to(users::delete_user)),
        );
}
