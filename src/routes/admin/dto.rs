use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::user;

/// Account listing shape for administrators. The password hash is never
/// serialized out of this service.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub profile_pic: Option<String>,
    pub roll_no: Option<String>,
    pub class_level: Option<String>,
    pub teacher_code: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            user_id: model.user_id.to_string(),
            name: model.name,
            email: model.email,
            role: model.role.as_str().to_string(),
            profile_pic: model.profile_pic,
            roll_no: model.roll_no,
            class_level: model.class_level,
            teacher_code: model.teacher_code,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    pub message: String,
}
