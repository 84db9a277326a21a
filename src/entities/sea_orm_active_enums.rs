use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role_enum")]
#[serde(rename_all = "lowercase")]
pub enum RoleEnum {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "teacher")]
    Teacher,
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "visitor")]
    Visitor,
}

impl RoleEnum {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleEnum::Admin => "admin",
            RoleEnum::Teacher => "teacher",
            RoleEnum::Student => "student",
            RoleEnum::Visitor => "visitor",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(RoleEnum::Admin),
            "teacher" => Some(RoleEnum::Teacher),
            "student" => Some(RoleEnum::Student),
            "visitor" => Some(RoleEnum::Visitor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for role in [
            RoleEnum::Admin,
            RoleEnum::Teacher,
            RoleEnum::Student,
            RoleEnum::Visitor,
        ] {
            assert_eq!(RoleEnum::parse(role.as_str()), Some(role));
        }
        assert_eq!(RoleEnum::parse("manager"), None);
    }
}
