use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{
    RecordAttendanceRequest, RecordMarksheetRequest, RecordResponse, StudentSummary,
};
use crate::entities::user::{AttendanceEntry, AttendanceStatus, ScoreEntry};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::UserRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/api/teacher/students", get(list_students))
        .route("/api/teacher/attendance", post(record_attendance))
        .route("/api/teacher/marksheet", post(record_marksheet))
}

fn parse_student_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::bad_request("Invalid student id"))
}

/// Student roster endpoint - teachers and admins
#[utoipa::path(
    get,
    path = "/api/teacher/students",
    responses(
        (status = 200, description = "All student accounts", body = [StudentSummary]),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Not a teacher or admin"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn list_students(
    AuthClaims(auth_claims): AuthClaims,
) -> Result<(StatusCode, Json<Vec<StudentSummary>>), ApiError> {
    permission::is_teacher_or_admin(&auth_claims)?;

    let user_repo = UserRepository::new();
    let students = user_repo
        .find_students()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to fetch students: {}", e)))?;

    let responses = students.into_iter().map(StudentSummary::from).collect();

    Ok((StatusCode::OK, Json(responses)))
}

/// Record attendance endpoint - teacher only
#[utoipa::path(
    post,
    path = "/api/teacher/attendance",
    request_body = RecordAttendanceRequest,
    responses(
        (status = 200, description = "Attendance recorded", body = RecordResponse),
        (status = 400, description = "Invalid student id or status"),
        (status = 403, description = "Not a teacher"),
        (status = 404, description = "Student not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn record_attendance(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<RecordAttendanceRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    permission::is_teacher(&auth_claims)?;

    let student_id = parse_student_id(&payload.student_id)?;
    let status = AttendanceStatus::parse(payload.status.trim())
        .ok_or_else(|| ApiError::bad_request("Status must be present or absent"))?;

    let entry = AttendanceEntry {
        date: payload.date,
        status,
    };

    let user_repo = UserRepository::new();
    user_repo
        .append_attendance(student_id, entry)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to record attendance: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    tracing::info!(student_id = %student_id, date = %payload.date, "Attendance recorded");

    Ok((
        StatusCode::OK,
        Json(RecordResponse {
            message: "Attendance recorded".to_string(),
        }),
    ))
}

/// Record marksheet endpoint - teacher only
#[utoipa::path(
    post,
    path = "/api/teacher/marksheet",
    request_body = RecordMarksheetRequest,
    responses(
        (status = 200, description = "Score recorded", body = RecordResponse),
        (status = 400, description = "Invalid student id or subject"),
        (status = 403, description = "Not a teacher"),
        (status = 404, description = "Student not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Teachers"
)]
pub async fn record_marksheet(
    AuthClaims(auth_claims): AuthClaims,
    Json(payload): Json<RecordMarksheetRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    permission::is_teacher(&auth_claims)?;

    let student_id = parse_student_id(&payload.student_id)?;
    let subject = payload.subject.trim().to_string();
    if subject.is_empty() {
        return Err(ApiError::bad_request("Subject is required"));
    }
    if !payload.marks.is_finite() || payload.marks < 0.0 {
        return Err(ApiError::bad_request("Marks must be a non-negative number"));
    }

    let entry = ScoreEntry {
        subject,
        marks: payload.marks,
    };

    let user_repo = UserRepository::new();
    user_repo
        .append_score(student_id, entry)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to record score: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    tracing::info!(student_id = %student_id, "Score recorded");

    Ok((
        StatusCode::OK,
        Json(RecordResponse {
            message: "Score recorded".to_string(),
        }),
    ))
}
