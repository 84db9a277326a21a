use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admissions::AdmissionId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Admissions::FormNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admissions::AdmissionNo).string().null())
                    .col(ColumnDef::new(Admissions::Student).custom("jsonb").not_null())
                    .col(ColumnDef::new(Admissions::Address).custom("jsonb").not_null())
                    .col(ColumnDef::new(Admissions::Father).custom("jsonb").not_null())
                    .col(ColumnDef::new(Admissions::Mother).custom("jsonb").not_null())
                    .col(
                        ColumnDef::new(Admissions::AdmissionDetails)
                            .custom("jsonb")
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Admissions::PreviousAcademicRecord)
                            .custom("jsonb")
                            .not_null()
                            .extra("DEFAULT '[]'::jsonb".to_string()),
                    )
                    .col(ColumnDef::new(Admissions::Appraisal).custom("jsonb").null())
                    .col(
                        ColumnDef::new(Admissions::ParentGuardian)
                            .custom("jsonb")
                            .not_null(),
                    )
                    .col(ColumnDef::new(Admissions::Photo).string().not_null())
                    .col(ColumnDef::new(Admissions::Aadhar).string().not_null())
                    .col(ColumnDef::new(Admissions::Signature).string().null())
                    .col(ColumnDef::new(Admissions::BirthCertificate).string().null())
                    .col(
                        ColumnDef::new(Admissions::CreatedAt)
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
                    .name("idx_admissions_created_at")
                    .table(Admissions::Table)
                    .col(Admissions::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_admissions_created_at")
                    .table(Admissions::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Admissions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Admissions {
    Table,
    AdmissionId,
    FormNo,
    AdmissionNo,
    Student,
    Address,
    Father,
    Mother,
    AdmissionDetails,
    PreviousAcademicRecord,
    Appraisal,
    ParentGuardian,
    Photo,
    Aadhar,
    Signature,
    BirthCertificate,
    CreatedAt,
}
