use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get},
};
use uuid::Uuid;

use super::dto::{DeleteUserResponse, UserResponse};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::UserRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/user/{user_id}", delete(delete_user))
}

/// List users endpoint - admin only
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "All registered accounts", body = [UserResponse]),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_users(
    AuthClaims(auth_claims): AuthClaims,
) -> Result<(StatusCode, Json<Vec<UserResponse>>), ApiError> {
    permission::is_admin(&auth_claims)?;

    let user_repo = UserRepository::new();
    let users = user_repo
        .find_all()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to fetch users: {}", e)))?;

    let responses = users.into_iter().map(UserResponse::from).collect();

    Ok((StatusCode::OK, Json(responses)))
}

/// Delete user endpoint - admin only
#[utoipa::path(
    delete,
    path = "/api/admin/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "Account id")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_user(
    AuthClaims(auth_claims): AuthClaims,
    Path(user_id): Path<Uuid>,
) -> Result<(StatusCode, Json<DeleteUserResponse>), ApiError> {
    permission::is_admin(&auth_claims)?;

    let user_repo = UserRepository::new();
    let result = user_repo
        .delete(user_id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to delete user: {}", e)))?;

    if result.rows_affected == 0 {
        return Err(ApiError::not_found("User not found"));
    }

    tracing::info!(user_id = %user_id, "User account deleted");

    Ok((
        StatusCode::OK,
        Json(DeleteUserResponse {
            message: "User deleted".to_string(),
        }),
    ))
}
