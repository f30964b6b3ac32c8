use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{User, UserPayload};
use crate::services::{UserGenerator, UserStore};
use crate::utils::AppError;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Quantidade de usuários; <= 0 ou ausente usa o default configurado
    pub count: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfigResponse {
    pub default_generation_count: u32,
    pub max_generation_count: u32,
}

/// GET /api/users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in the store", body = [User])
    )
)]
pub async fn list_users(store: web::Data<UserStore>) -> impl Responder {
    log::info!("📋 GET /users - Fetching all users");

    let users = store.list();

    log::info!("✅ Retrieved {} users", users.len());
    HttpResponse::Ok().json(users)
}

/// GET /api/users/{id} - Busca usuário por id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    store: web::Data<UserStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔍 GET /users/{} - Fetching user", id);

    match store.get(id) {
        Some(user) => {
            log::info!("✅ Found user: {}", user.email);
            Ok(HttpResponse::Ok().json(user))
        }
        None => {
            log::warn!("⚠️ User with ID {} not found", id);
            Err(AppError::NotFound(format!("user {}", id)))
        }
    }
}

/// POST /api/users - Cria usuário (o id do corpo é ignorado)
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User)
    )
)]
pub async fn create_user(
    store: web::Data<UserStore>,
    body: web::Json<UserPayload>,
) -> impl Responder {
    log::info!("📝 POST /users - Creating user: {}", body.email);

    let created = store.create(body.into_inner());

    log::info!("✅ User created with ID: {}", created.id);
    HttpResponse::Created().json(created)
}

/// PUT /api/users/{id} - Substitui todos os campos do usuário
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User identifier")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    store: web::Data<UserStore>,
    path: web::Path<u64>,
    body: web::Json<UserPayload>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔧 PUT /users/{} - Updating user", id);

    match store.update(id, body.into_inner()) {
        Some(user) => {
            log::info!("✅ User updated: {}", user.email);
            Ok(HttpResponse::Ok().json(user))
        }
        None => {
            log::warn!("⚠️ User with ID {} not found for update", id);
            Err(AppError::NotFound(format!("user {}", id)))
        }
    }
}

/// DELETE /api/users/{id} - Remove usuário
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = u64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    store: web::Data<UserStore>,
    path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /users/{} - Removing user", id);

    if store.delete(id) {
        log::info!("✅ User with ID {} deleted", id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        log::warn!("⚠️ User with ID {} not found for deletion", id);
        Err(AppError::NotFound(format!("user {}", id)))
    }
}

/// POST /api/users/generate?count=N - Gera usuários aleatórios
#[utoipa::path(
    post,
    path = "/api/users/generate",
    tag = "Users",
    params(GenerateQuery),
    responses(
        (status = 200, description = "Generated users", body = [User]),
        (status = 400, description = "Count exceeds the configured maximum")
    )
)]
pub async fn generate_users(
    store: web::Data<UserStore>,
    generator: web::Data<UserGenerator>,
    query: web::Query<GenerateQuery>,
) -> Result<HttpResponse, AppError> {
    let requested = query.count.unwrap_or(0);
    log::info!("🎲 POST /users/generate - Requested count: {}", requested);

    match generator.generate(&store, requested) {
        Ok(users) => {
            log::info!("✅ Generated {} users", users.len());
            Ok(HttpResponse::Ok().json(users))
        }
        Err(e) => {
            log::warn!("⚠️ Generation rejected: {}", e);
            Err(e)
        }
    }
}

/// GET /api/users/config - Limites de geração configurados
#[utoipa::path(
    get,
    path = "/api/users/config",
    tag = "Users",
    responses(
        (status = 200, description = "Generation limits", body = GenerationConfigResponse)
    )
)]
pub async fn get_generation_config(generator: web::Data<UserGenerator>) -> impl Responder {
    let limits = generator.limits();

    HttpResponse::Ok().json(GenerationConfigResponse {
        default_generation_count: limits.default_count,
        max_generation_count: limits.max_count,
    })
}
