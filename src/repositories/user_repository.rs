use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::user::{self, AttendanceEntry, ScoreEntry};
use crate::static_service::DATABASE_CONNECTION;

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find_by_id(user_id).one(db).await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?;
        Ok(user)
    }

    pub async fn find_all(&self) -> Result<Vec<user::Model>> {
        let db = self.get_connection();
        let users = user::Entity::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(users)
    }

    pub async fn find_students(&self) -> Result<Vec<user::Model>> {
        let db = self.get_connection();
        let students = user::Entity::find()
            .filter(user::Column::Role.eq(RoleEnum::Student))
            .order_by_desc(user::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(students)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        name: String,
        email: String,
        password: String,
        role: RoleEnum,
        profile_pic: Option<String>,
        roll_no: Option<String>,
        class_level: Option<String>,
        teacher_code: Option<String>,
    ) -> Result<user::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let user_model = user::ActiveModel {
            user_id: Set(user_id),
            name: Set(name),
            email: Set(email),
            password: Set(password),
            role: Set(role),
            profile_pic: Set(profile_pic),
            roll_no: Set(roll_no),
            class_level: Set(class_level),
            teacher_code: Set(teacher_code),
            scores: Set(serde_json::json!([])),
            attendance: Set(serde_json::json!([])),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = user_model.insert(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, user_id: Uuid) -> Result<DeleteResult> {
        let db = self.get_connection();
        let result = user::Entity::delete_by_id(user_id).exec(db).await?;
        Ok(result)
    }

    pub async fn get_scores(&self, user_id: Uuid) -> Result<Option<Vec<ScoreEntry>>> {
        let user = self.find_by_id(user_id).await?;
        match user {
            Some(model) => {
                let scores: Vec<ScoreEntry> = serde_json::from_value(model.scores)?;
                Ok(Some(scores))
            }
            None => Ok(None),
        }
    }

    pub async fn get_attendance(&self, user_id: Uuid) -> Result<Option<Vec<AttendanceEntry>>> {
        let user = self.find_by_id(user_id).await?;
        match user {
            Some(model) => {
                let attendance: Vec<AttendanceEntry> = serde_json::from_value(model.attendance)?;
                Ok(Some(attendance))
            }
            None => Ok(None),
        }
    }

    /// Appends a score record to the target student. Returns `None` when the
    /// student does not exist.
    pub async fn append_score(
        &self,
        student_id: Uuid,
        entry: ScoreEntry,
    ) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let Some(student) = self.find_by_id(student_id).await? else {
            return Ok(None);
        };

        let mut scores: Vec<ScoreEntry> = serde_json::from_value(student.scores.clone())?;
        scores.push(entry);

        let mut active_user: user::ActiveModel = student.into();
        active_user.scores = Set(serde_json::to_value(&scores)?);
        active_user.updated_at = Set(chrono::Utc::now().naive_utc());

        let result = active_user.update(db).await?;
        Ok(Some(result))
    }

    /// Appends an attendance record to the target student. Returns `None`
    /// when the student does not exist.
    pub async fn append_attendance(
        &self,
        student_id: Uuid,
        entry: AttendanceEntry,
    ) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let Some(student) = self.find_by_id(student_id).await? else {
            return Ok(None);
        };

        let mut attendance: Vec<AttendanceEntry> =
            serde_json::from_value(student.attendance.clone())?;
        attendance.push(entry);

        let mut active_user: user::ActiveModel = student.into();
        active_user.attendance = Set(serde_json::to_value(&attendance)?);
        active_user.updated_at = Set(chrono::Utc::now().naive_utc());

        let result = active_user.update(db).await?;
        Ok(Some(result))
    }
}
