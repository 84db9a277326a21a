pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_table_users;
mod m20250801_000002_create_table_admissions;
mod m20250801_000003_create_table_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_table_users::Migration),
            Box::new(m20250801_000002_create_table_admissions::Migration),
            Box::new(m20250801_000003_create_table_notifications::Migration),
        ]
    }
}
