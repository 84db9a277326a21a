use once_cell::sync::OnceCell;
use sea_orm::{Database, DatabaseConnection};

use crate::config::APP_CONFIG;

pub static DATABASE_CONNECTION: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn get_database_connection() -> &'static DatabaseConnection {
    if let Some(connection) = DATABASE_CONNECTION.get() {
        return connection;
    }

    let connection = Database::connect(&APP_CONFIG.database_url)
        .await
        .expect("Failed to connect to database");

    DATABASE_CONNECTION.set(connection).ok();
    DATABASE_CONNECTION
        .get()
        .expect("DATABASE_CONNECTION not set")
}
