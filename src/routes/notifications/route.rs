use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get},
};
use uuid::Uuid;

use super::dto::{CreateNotificationRequest, DeleteNotificationResponse, NotificationResponse};
use crate::config::NOTIFICATION_LIST_LIMIT;
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::NotificationRepository;

pub fn create_route() -> Router {
    Router::new()
        .route(
            "/api/notifications",
            get(list_notifications).post(create_notification),
        )
        .route(
            "/api/notifications/{notification_id}",
            delete(delete_notification),
        )
}

/// List notifications endpoint - public, newest first, capped at five
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Latest notifications", body = [NotificationResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notifications"
)]
pub async fn list_notifications()
-> Result<(StatusCode, Json<Vec<NotificationResponse>>), ApiError> {
    let notification_repo = NotificationRepository::new();
    let notifications = notification_repo
        .find_latest(NOTIFICATION_LIST_LIMIT)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to fetch notifications: {}", e)))?;

    let responses = notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect();

    Ok((StatusCode::OK, Json(responses)))
}

/// Create notification endpoint - teachers and admins
#[utoipa::path(
    post,
    path = "/api/notifications",
    request_body = CreateNotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = NotificationResponse),
        (status = 400, description = "Missing title or description"),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Not a teacher or admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn create_notification(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<NotificationResponse>), ApiError> {
    permission::is_teacher_or_admin(&auth_claims)?;

    let (title, description, link) = payload
        .normalized()
        .ok_or_else(|| ApiError::bad_request("Title and description are required"))?;

    let notification_repo = NotificationRepository::new();
    let created = notification_repo
        .create(title, description, link)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to create notification: {}", e)))?;

    tracing::info!(notification_id = %created.notification_id, "Notification published");

    Ok((StatusCode::CREATED, Json(NotificationResponse::from(created))))
}

/// Delete notification endpoint - teachers and admins
#[utoipa::path(
    delete,
    path = "/api/notifications/{notification_id}",
    params(("notification_id" = Uuid, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification deleted", body = DeleteNotificationResponse),
        (status = 404, description = "Notification not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn delete_notification(
    AuthClaims(auth_claims): AuthClaims,
    Path(notification_id): Path<Uuid>,
) -> Result<(StatusCode, Json<DeleteNotificationResponse>), ApiError> {
    permission::is_teacher_or_admin(&auth_claims)?;

    let notification_repo = NotificationRepository::new();
    let deleted = notification_repo
        .delete(notification_id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to delete notification: {}", e)))?;

    if !deleted {
        return Err(ApiError::not_found("Notification not found"));
    }

    Ok((
        StatusCode::OK,
        Json(DeleteNotificationResponse {
            message: "Notification deleted".to_string(),
        }),
    ))
}
