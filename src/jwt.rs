use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::RoleEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    Visitor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
            UserRole::Visitor => "visitor",
        }
    }
}

impl From<RoleEnum> for UserRole {
    fn from(role: RoleEnum) -> Self {
        match role {
            RoleEnum::Admin => UserRole::Admin,
            RoleEnum::Teacher => UserRole::Teacher,
            RoleEnum::Student => UserRole::Student,
            RoleEnum::Visitor => UserRole::Visitor,
        }
    }
}

/// Claims carried by a session token: identity plus role, time-boxed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: String,
    pub name: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtManager {
    secret: String,
}

impl JwtManager {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn create_jwt(
        &self,
        user_id: &str,
        name: &str,
        role: UserRole,
        expires_in: i64,
    ) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            name: name.to_string(),
            role,
            iat: now,
            exp: now + expires_in,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign session token")?;

        Ok(token)
    }

    pub fn verify_jwt(&self, token: &str) -> Result<TokenClaims> {
        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .context("Invalid or expired session token")?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_verify_round_trip() {
        let manager = JwtManager::new("unit-test-secret");
        let token = manager
            .create_jwt("user-1", "Jane Doe", UserRole::Teacher, 3600)
            .unwrap();

        let claims = manager.verify_jwt(&token).unwrap();
        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.name, "Jane Doe");
        assert_eq!(claims.role, UserRole::Teacher);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let manager = JwtManager::new("unit-test-secret");
        let token = manager
            .create_jwt("user-1", "Jane Doe", UserRole::Student, -120)
            .unwrap();

        assert!(manager.verify_jwt(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let manager = JwtManager::new("unit-test-secret");
        let token = manager
            .create_jwt("user-1", "Jane Doe", UserRole::Admin, 3600)
            .unwrap();

        let other = JwtManager::new("another-secret");
        assert!(other.verify_jwt(&token).is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Visitor).unwrap(),
            "\"visitor\""
        );
        assert_eq!(UserRole::Admin.as_str(), "admin");
    }
}
