use axum::{Json, Router, http::StatusCode, routing::get};
use uuid::Uuid;

use super::dto::{AttendanceResponse, ScoresResponse};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::jwt::TokenClaims;
use crate::middleware::permission;
use crate::repositories::UserRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/student/scores", get(get_scores))
        .route("/api/student/attendance", get(get_attendance))
}

// The subject of both reads is always the caller; the id comes from the
// token, never from the request.
fn claims_user_id(auth_claims: &TokenClaims) -> Result<Uuid, ApiError> {
    Uuid::parse_str(&auth_claims.user_id)
        .map_err(|_| ApiError::forbidden("Invalid or Expired Token"))
}

/// Get own scores endpoint - student only
#[utoipa::path(
    get,
    path = "/api/student/scores",
    responses(
        (status = 200, description = "Score records of the caller", body = ScoresResponse),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Not a student"),
        (status = 404, description = "Account no longer exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_scores(
    AuthClaims(auth_claims): AuthClaims,
) -> Result<(StatusCode, Json<ScoresResponse>), ApiError> {
    permission::is_student(&auth_claims)?;
    let user_id = claims_user_id(&auth_claims)?;

    let user_repo = UserRepository::new();
    let scores = user_repo
        .get_scores(user_id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to fetch scores: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    Ok((StatusCode::OK, Json(ScoresResponse { scores })))
}

/// Get own attendance endpoint - student only
#[utoipa::path(
    get,
    path = "/api/student/attendance",
    responses(
        (status = 200, description = "Attendance records of the caller", body = AttendanceResponse),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Not a student"),
        (status = 404, description = "Account no longer exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
pub async fn get_attendance(
    AuthClaims(auth_claims): AuthClaims,
) -> Result<(StatusCode, Json<AttendanceResponse>), ApiError> {
    permission::is_student(&auth_claims)?;
    let user_id = claims_user_id(&auth_claims)?;

    let user_repo = UserRepository::new();
    let attendance = user_repo
        .get_attendance(user_id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to fetch attendance: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    Ok((StatusCode::OK, Json(AttendanceResponse { attendance })))
}
