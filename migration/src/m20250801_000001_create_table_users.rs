use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TYPE role_enum AS ENUM ('admin', 'teacher', 'student', 'visitor');
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .custom("role_enum")
                            .not_null()
                            .default("visitor"),
                    )
                    .col(ColumnDef::new(Users::ProfilePic).string().null())
                    .col(ColumnDef::new(Users::RollNo).string().null())
                    .col(ColumnDef::new(Users::ClassLevel).string().null())
                    .col(ColumnDef::new(Users::TeacherCode).string().null())
                    .col(
                        ColumnDef::new(Users::Scores)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Users::Attendance)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIMESTAMP".to_string()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TYPE IF EXISTS role_enum;")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
    Name,
    Email,
    Password,
    Role,
    ProfilePic,
    RollNo,
    ClassLevel,
    TeacherCode,
    Scores,
    Attendance,
    CreatedAt,
    UpdatedAt,
}
