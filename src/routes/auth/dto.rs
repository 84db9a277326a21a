use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::sea_orm_active_enums::RoleEnum;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendOtpRequest {
    #[schema(example = "user@example.com")]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendOtpResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    #[schema(example = "user@example.com")]
    pub email: String,

    #[schema(example = "123456")]
    pub otp: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "user@example.com")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
    pub user: LoginUser,
}

/// Role-specific registration fields as a tagged variant: the required set
/// for each role is checked exhaustively at construction, so an account can
/// never be persisted with its role fields missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleProfile {
    Student {
        roll_no: String,
        class_level: String,
    },
    Teacher {
        teacher_code: String,
    },
    Admin,
    Visitor,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl RoleProfile {
    pub fn from_parts(
        role: &RoleEnum,
        roll_no: Option<String>,
        class_level: Option<String>,
        teacher_code: Option<String>,
    ) -> Result<Self, String> {
        match role {
            RoleEnum::Student => {
                let roll_no = non_empty(roll_no)
                    .ok_or_else(|| "Missing student-specific fields".to_string())?;
                let class_level = non_empty(class_level)
                    .ok_or_else(|| "Missing student-specific fields".to_string())?;
                Ok(RoleProfile::Student {
                    roll_no,
                    class_level,
                })
            }
            RoleEnum::Teacher => {
                let teacher_code = non_empty(teacher_code)
                    .ok_or_else(|| "Missing teacher-specific fields".to_string())?;
                Ok(RoleProfile::Teacher { teacher_code })
            }
            RoleEnum::Admin => Ok(RoleProfile::Admin),
            RoleEnum::Visitor => Ok(RoleProfile::Visitor),
        }
    }

    pub fn into_columns(self) -> (Option<String>, Option<String>, Option<String>) {
        match self {
            RoleProfile::Student {
                roll_no,
                class_level,
            } => (Some(roll_no), Some(class_level), None),
            RoleProfile::Teacher { teacher_code } => (None, None, Some(teacher_code)),
            RoleProfile::Admin | RoleProfile::Visitor => (None, None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_requires_roll_no_and_class() {
        assert!(RoleProfile::from_parts(&RoleEnum::Student, None, None, None).is_err());
        assert!(
            RoleProfile::from_parts(&RoleEnum::Student, Some("12".into()), None, None).is_err()
        );
        assert!(
            RoleProfile::from_parts(&RoleEnum::Student, Some(" ".into()), Some("5A".into()), None)
                .is_err()
        );

        let profile = RoleProfile::from_parts(
            &RoleEnum::Student,
            Some("12".into()),
            Some("5A".into()),
            None,
        )
        .unwrap();
        assert_eq!(
            profile,
            RoleProfile::Student {
                roll_no: "12".into(),
                class_level: "5A".into()
            }
        );
    }

    #[test]
    fn test_teacher_requires_teacher_code() {
        assert!(RoleProfile::from_parts(&RoleEnum::Teacher, None, None, None).is_err());
        let profile =
            RoleProfile::from_parts(&RoleEnum::Teacher, None, None, Some("T-9".into())).unwrap();
        assert_eq!(
            profile,
            RoleProfile::Teacher {
                teacher_code: "T-9".into()
            }
        );
    }

    #[test]
    fn test_admin_and_visitor_need_no_extra_fields() {
        assert_eq!(
            RoleProfile::from_parts(&RoleEnum::Admin, None, None, None).unwrap(),
            RoleProfile::Admin
        );
        assert_eq!(
            RoleProfile::from_parts(&RoleEnum::Visitor, None, None, None).unwrap(),
            RoleProfile::Visitor
        );
    }

    #[test]
    fn test_into_columns() {
        let (roll_no, class_level, teacher_code) = RoleProfile::Teacher {
            teacher_code: "T-9".into(),
        }
        .into_columns();
        assert_eq!(roll_no, None);
        assert_eq!(class_level, None);
        assert_eq!(teacher_code, Some("T-9".into()));
    }
}
