use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::user;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    pub user_id: String,
    pub name: String,
    pub roll_no: Option<String>,
    pub class_level: Option<String>,
}

impl From<user::Model> for StudentSummary {
    fn from(model: user::Model) -> Self {
        Self {
            user_id: model.user_id.to_string(),
            name: model.name,
            roll_no: model.roll_no,
            class_level: model.class_level,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    pub student_id: String,

    #[schema(example = "2025-06-02")]
    pub date: chrono::NaiveDate,

    #[schema(example = "present")]
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordMarksheetRequest {
    pub student_id: String,

    #[schema(example = "Mathematics")]
    pub subject: String,

    #[schema(example = 87.5)]
    pub marks: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordResponse {
    pub message: String,
}
