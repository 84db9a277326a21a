use std::sync::Arc;

use axum::{Json, Router, extract::Multipart, http::StatusCode, routing::post};
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use uuid::Uuid;

use super::dto::{
    LoginRequest, LoginResponse, LoginUser, RegisterResponse, RoleProfile, SendOtpRequest,
    SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse,
};
use crate::config::{APP_CONFIG, JWT_EXPIRED_TIME};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::jwt::{JwtManager, UserRole};
use crate::rabbitmq_service::{RabbitMQService, get_rabbitmq_connection};
use crate::redis_service::OtpStore;
use crate::repositories::UserRepository;
use crate::storage;
use crate::utils::gen_otp_code::gen_code;

pub fn create_route() -> Router {
    // OTP issuance triggers an outbound mail per call; throttle per client.
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(3)
            .finish()
            .expect("Failed to build rate limiter config"),
    );

    let send_otp_route = Router::new()
        .route("/api/auth/send-otp", post(send_otp))
        .layer(GovernorLayer {
            config: governor_conf,
        });

    Router::new()
        .route("/api/auth/verify-otp", post(verify_otp))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .merge(send_otp_route)
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Send OTP endpoint - emails a 6-digit registration code
#[utoipa::path(
    post,
    path = "/api/auth/send-otp",
    request_body = SendOtpRequest,
    responses(
        (status = 200, description = "OTP sent successfully", body = SendOtpResponse),
        (status = 400, description = "Missing or malformed email"),
        (status = 500, description = "Email delivery failed")
    ),
    tag = "Authentication"
)]
pub async fn send_otp(
    Json(payload): Json<SendOtpRequest>,
) -> Result<(StatusCode, Json<SendOtpResponse>), ApiError> {
    let email = payload.email.trim();
    if email.is_empty() {
        return Err(ApiError::bad_request("Email is required"));
    }
    if !is_valid_email(email) {
        return Err(ApiError::bad_request("Invalid email address"));
    }

    let otp_code = gen_code();

    // Delivery first: a code that could not be mailed must not linger in the
    // store as a pending verification.
    let rabbitmq_conn = get_rabbitmq_connection().await;
    let email_subject = "Your OTP for Registration";
    let email_body = format!("Your OTP is {}. It is valid for 10 minutes.", otp_code);

    RabbitMQService::publish_to_mail_queue(rabbitmq_conn, email, email_subject, &email_body)
        .await
        .map_err(|e| {
            tracing::error!(email = %email, "Failed to publish OTP mail: {}", e);
            ApiError::internal("Failed to send OTP")
        })?;

    OtpStore::store_code(email, &otp_code).await.map_err(|e| {
        tracing::error!(email = %email, "Failed to store OTP: {}", e);
        ApiError::internal("Failed to send OTP")
    })?;

    tracing::info!(email = %email, "Registration OTP issued");

    Ok((
        StatusCode::OK,
        Json(SendOtpResponse {
            message: "OTP sent successfully".to_string(),
        }),
    ))
}

/// Verify OTP endpoint - single-use check of a pending registration code
#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "OTP verified successfully", body = VerifyOtpResponse),
        (status = 400, description = "Missing, mismatched or expired OTP", body = VerifyOtpResponse)
    ),
    tag = "Authentication"
)]
pub async fn verify_otp(
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<(StatusCode, Json<VerifyOtpResponse>), ApiError> {
    let email = payload.email.trim();
    let otp = payload.otp.trim();
    if email.is_empty() || otp.is_empty() {
        return Err(ApiError::bad_request("Email and OTP are required"));
    }

    let stored_code = OtpStore::fetch_code(email)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to read OTP store: {}", e)))?;

    // An expired code has already been evicted by the store, so absence
    // covers "never requested", "already consumed" and "expired" alike.
    let Some(stored_code) = stored_code else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(VerifyOtpResponse {
                success: false,
                message: "OTP expired or not found".to_string(),
            }),
        ));
    };

    if stored_code != otp {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(VerifyOtpResponse {
                success: false,
                message: "Invalid OTP".to_string(),
            }),
        ));
    }

    OtpStore::consume(email)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to consume OTP: {}", e)))?;

    tracing::info!(email = %email, "Registration OTP verified");

    Ok((
        StatusCode::OK,
        Json(VerifyOtpResponse {
            success: true,
            message: "OTP verified successfully".to_string(),
        }),
    ))
}

/// Register endpoint - multipart payload with optional profile picture
#[utoipa::path(
    post,
    path = "/api/auth/register",
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Missing fields or duplicate email"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn register(
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let mut name = None;
    let mut email = None;
    let mut password = None;
    let mut role = None;
    let mut roll_no = None;
    let mut class_level = None;
    let mut teacher_code = None;
    let mut profile_pic: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => name = Some(read_text(field, "name").await?),
            "email" => email = Some(read_text(field, "email").await?),
            "password" => password = Some(read_text(field, "password").await?),
            "role" => role = Some(read_text(field, "role").await?),
            "rollNo" => roll_no = Some(read_text(field, "rollNo").await?),
            "classLevel" => class_level = Some(read_text(field, "classLevel").await?),
            "teacherId" => teacher_code = Some(read_text(field, "teacherId").await?),
            "profilePic" => {
                let file_name = field.file_name().unwrap_or("profile").to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::bad_request(format!("Failed to read profilePic field: {}", e))
                })?;
                profile_pic = Some((file_name, data.to_vec()));
            }
            _ => {}
        }
    }

    let (Some(name), Some(email), Some(password), Some(role)) = (name, email, password, role)
    else {
        return Err(ApiError::bad_request("Missing required fields"));
    };
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    let role = RoleEnum::parse(role.trim())
        .ok_or_else(|| ApiError::bad_request("Invalid role"))?;
    // Admin accounts come from bootstrap, never from self-registration.
    if role == RoleEnum::Admin {
        return Err(ApiError::bad_request("Invalid role"));
    }
    let profile =
        RoleProfile::from_parts(&role, roll_no, class_level, teacher_code).map_err(ApiError::bad_request)?;

    let user_repo = UserRepository::new();
    let existing = user_repo
        .find_by_email(email.trim())
        .await
        .map_err(|e| ApiError::internal(format!("Database error: {}", e)))?;
    if existing.is_some() {
        return Err(ApiError::bad_request("User already exists"));
    }

    let hashed_password = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::internal(format!("Failed to hash password: {}", e)))?;

    let profile_pic_url = match profile_pic {
        Some((file_name, data)) => Some(
            storage::save_upload("profiles", &file_name, &data)
                .await
                .map_err(|e| ApiError::internal(format!("Failed to store profile picture: {}", e)))?,
        ),
        None => None,
    };

    let (roll_no, class_level, teacher_code) = profile.into_columns();
    user_repo
        .create(
            Uuid::new_v4(),
            name.trim().to_string(),
            email.trim().to_string(),
            hashed_password,
            role,
            profile_pic_url,
            roll_no,
            class_level,
            teacher_code,
        )
        .await
        .map_err(|e| {
            // The unique index on email backstops the pre-insert check when
            // two registrations race.
            if is_unique_violation(&e) {
                ApiError::bad_request("User already exists")
            } else {
                ApiError::internal(format!("Failed to create user: {}", e))
            }
        })?;

    tracing::info!(email = %email.trim(), "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

async fn read_text(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read {} field: {}", name, e)))
}

fn is_unique_violation(e: &anyhow::Error) -> bool {
    e.downcast_ref::<sea_orm::DbErr>()
        .and_then(|db_err| db_err.sql_err())
        .is_some_and(|sql_err| matches!(sql_err, sea_orm::SqlErr::UniqueConstraintViolation(_)))
}

/// Login endpoint - returns a session token with identity and role
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn login(
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let user_repo = UserRepository::new();
    let user_info = user_repo
        .find_by_email(payload.email.trim())
        .await
        .map_err(|e| ApiError::internal(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::bad_request("Invalid credentials"))?;

    let password_valid = bcrypt::verify(&payload.password, &user_info.password)
        .map_err(|e| ApiError::internal(format!("Password verification error: {}", e)))?;

    if !password_valid {
        return Err(ApiError::bad_request("Invalid credentials"));
    }

    let user_role = UserRole::from(user_info.role.clone());

    let jwt_manager = JwtManager::new(APP_CONFIG.jwt_secret.clone());
    let token = jwt_manager
        .create_jwt(
            &user_info.user_id.to_string(),
            &user_info.name,
            user_role,
            JWT_EXPIRED_TIME,
        )
        .map_err(|e| ApiError::internal(format!("Failed to create token: {}", e)))?;

    let response = LoginResponse {
        token,
        role: user_info.role.as_str().to_string(),
        user: LoginUser {
            name: user_info.name,
            email: user_info.email,
        },
    };

    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_requires_typed_error() {
        // Message text alone never classifies as a duplicate; only a typed
        // constraint violation from the database does.
        assert!(!is_unique_violation(&anyhow::anyhow!(
            "duplicate key value violates unique constraint \"users_email_key\""
        )));

        let db_err = sea_orm::DbErr::Custom("connection reset".to_string());
        assert!(!is_unique_violation(&anyhow::Error::from(db_err)));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b@school.edu.in"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@.com"));
    }
}
