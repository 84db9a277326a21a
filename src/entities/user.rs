//! `SeaORM` Entity for the users table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::sea_orm_active_enums::RoleEnum;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub user_id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: RoleEnum,
    pub profile_pic: Option<String>,
    pub roll_no: Option<String>,
    pub class_level: Option<String>,
    pub teacher_code: Option<String>,
    /// Append-only list of `ScoreEntry`, stored as a JSON array.
    pub scores: Json,
    /// Append-only list of `AttendanceEntry`, stored as a JSON array.
    pub attendance: Json,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntry {
    pub subject: String,
    pub marks: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Accepts the status the way clients send it (any casing).
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "present" => Some(AttendanceStatus::Present),
            "absent" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceEntry {
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_status_parse_is_case_insensitive() {
        assert_eq!(
            AttendanceStatus::parse("Present"),
            Some(AttendanceStatus::Present)
        );
        assert_eq!(
            AttendanceStatus::parse("ABSENT"),
            Some(AttendanceStatus::Absent)
        );
        assert_eq!(AttendanceStatus::parse("late"), None);
    }

    #[test]
    fn test_attendance_status_serializes_lowercase() {
        let entry = AttendanceEntry {
            date: chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            status: AttendanceStatus::Present,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "present");
        assert_eq!(json["date"], "2025-06-02");
    }
}
