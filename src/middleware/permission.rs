use crate::error::ApiError;
use crate::jwt::{TokenClaims, UserRole};

/// Role checks are declarative per endpoint: each handler names its exact
/// allowed set, with no inheritance between roles.
fn require(claims: &TokenClaims, allowed: &[UserRole], label: &str) -> Result<(), ApiError> {
    if allowed.contains(&claims.role) {
        Ok(())
    } else {
        Err(ApiError::forbidden(format!("Access denied: {} only", label)))
    }
}

pub fn is_admin(claims: &TokenClaims) -> Result<(), ApiError> {
    require(claims, &[UserRole::Admin], "admins")
}

pub fn is_teacher(claims: &TokenClaims) -> Result<(), ApiError> {
    require(claims, &[UserRole::Teacher], "teachers")
}

pub fn is_student(claims: &TokenClaims) -> Result<(), ApiError> {
    require(claims, &[UserRole::Student], "students")
}

pub fn is_teacher_or_admin(claims: &TokenClaims) -> Result<(), ApiError> {
    require(claims, &[UserRole::Teacher, UserRole::Admin], "teacher or admin")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn claims_with(role: UserRole) -> TokenClaims {
        TokenClaims {
            user_id: "00000000-0000-0000-0000-000000000001".to_string(),
            name: "Test User".to_string(),
            role,
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[test]
    fn test_admin_only() {
        assert!(is_admin(&claims_with(UserRole::Admin)).is_ok());
        for role in [UserRole::Teacher, UserRole::Student, UserRole::Visitor] {
            let err = is_admin(&claims_with(role)).unwrap_err();
            assert_eq!(err.status, StatusCode::FORBIDDEN);
        }
    }

    #[test]
    fn test_teacher_or_admin() {
        assert!(is_teacher_or_admin(&claims_with(UserRole::Teacher)).is_ok());
        assert!(is_teacher_or_admin(&claims_with(UserRole::Admin)).is_ok());
        assert!(is_teacher_or_admin(&claims_with(UserRole::Student)).is_err());
        assert!(is_teacher_or_admin(&claims_with(UserRole::Visitor)).is_err());
    }

    #[test]
    fn test_no_role_hierarchy() {
        // Admins do not implicitly pass teacher- or student-scoped checks.
        assert!(is_teacher(&claims_with(UserRole::Admin)).is_err());
        assert!(is_student(&claims_with(UserRole::Admin)).is_err());
    }
}
