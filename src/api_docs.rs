use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::entities::user::{AttendanceEntry, AttendanceStatus, ScoreEntry};
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::route::health_check,
        routes::auth::route::send_otp,
        routes::auth::route::verify_otp,
        routes::auth::route::register,
        routes::auth::route::login,
        routes::admissions::route::submit_admission,
        routes::admissions::route::list_admissions,
        routes::admissions::route::get_admission,
        routes::admissions::route::assign_admission_no,
        routes::notifications::route::list_notifications,
        routes::notifications::route::create_notification,
        routes::notifications::route::delete_notification,
        routes::admin::route::list_users,
        routes::admin::route::delete_user,
        routes::students::route::get_scores,
        routes::students::route::get_attendance,
        routes::teachers::route::list_students,
        routes::teachers::route::record_attendance,
        routes::teachers::route::record_marksheet,
        routes::files::route::serve_upload,
    ),
    components(schemas(
        routes::auth::dto::SendOtpRequest,
        routes::auth::dto::SendOtpResponse,
        routes::auth::dto::VerifyOtpRequest,
        routes::auth::dto::VerifyOtpResponse,
        routes::auth::dto::RegisterResponse,
        routes::auth::dto::LoginRequest,
        routes::auth::dto::LoginUser,
        routes::auth::dto::LoginResponse,
        routes::admissions::dto::Gender,
        routes::admissions::dto::Caste,
        routes::admissions::dto::Behavior,
        routes::admissions::dto::StudentSection,
        routes::admissions::dto::AddressSection,
        routes::admissions::dto::ParentSection,
        routes::admissions::dto::AdmissionDetailsSection,
        routes::admissions::dto::PreviousSchool,
        routes::admissions::dto::AppraisalSection,
        routes::admissions::dto::GuardianSection,
        routes::admissions::dto::AdmissionForm,
        routes::admissions::dto::SubmitAdmissionResponse,
        routes::admissions::dto::AdmissionResponse,
        routes::admissions::dto::AssignAdmissionNoRequest,
        routes::admissions::dto::AssignAdmissionNoResponse,
        routes::notifications::dto::CreateNotificationRequest,
        routes::notifications::dto::NotificationResponse,
        routes::notifications::dto::DeleteNotificationResponse,
        routes::admin::dto::UserResponse,
        routes::admin::dto::DeleteUserResponse,
        routes::students::dto::ScoresResponse,
        routes::students::dto::AttendanceResponse,
        routes::teachers::dto::StudentSummary,
        routes::teachers::dto::RecordAttendanceRequest,
        routes::teachers::dto::RecordMarksheetRequest,
        routes::teachers::dto::RecordResponse,
        ScoreEntry,
        AttendanceEntry,
        AttendanceStatus,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Authentication", description = "OTP-gated registration and login"),
        (name = "Admissions", description = "Admission application intake and review"),
        (name = "Notifications", description = "Public notification board"),
        (name = "Admin", description = "Account administration"),
        (name = "Students", description = "Student self-service reads"),
        (name = "Teachers", description = "Roster, attendance and marksheet entry"),
        (name = "Files", description = "Stored uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
