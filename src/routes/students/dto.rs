use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::user::{AttendanceEntry, ScoreEntry};

#[derive(Debug, Serialize, ToSchema)]
pub struct ScoresResponse {
    pub scores: Vec<ScoreEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceResponse {
    pub attendance: Vec<AttendanceEntry>,
}
