use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::notification;
use crate::static_service::DATABASE_CONNECTION;

pub struct NotificationRepository;

impl NotificationRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn create(
        &self,
        title: String,
        description: String,
        link: Option<String>,
    ) -> Result<notification::Model> {
        let db = self.get_connection();
        let notification_model = notification::ActiveModel {
            notification_id: Set(Uuid::new_v4()),
            title: Set(title),
            description: Set(description),
            link: Set(link),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let result = notification_model.insert(db).await?;
        Ok(result)
    }

    pub async fn find_latest(&self, limit: u64) -> Result<Vec<notification::Model>> {
        let db = self.get_connection();
        let notifications = notification::Entity::find()
            .order_by_desc(notification::Column::CreatedAt)
            .limit(limit)
            .all(db)
            .await?;
        Ok(notifications)
    }

    /// Returns `false` when no record matched the id.
    pub async fn delete(&self, notification_id: Uuid) -> Result<bool> {
        let db = self.get_connection();
        let result = notification::Entity::delete_by_id(notification_id)
            .exec(db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
