//! `SeaORM` Entity for the admissions table
//!
//! Applications are a snapshot of a household's enrollment request. The
//! nested sections arrive as JSON and are stored as JSON columns; only the
//! admin-assigned admission number is ever mutated after creation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub admission_id: Uuid,
    pub form_no: String,
    pub admission_no: Option<String>,
    pub student: Json,
    pub address: Json,
    pub father: Json,
    pub mother: Json,
    pub admission_details: Json,
    pub previous_academic_record: Json,
    pub appraisal: Option<Json>,
    pub parent_guardian: Json,
    pub photo: String,
    pub aadhar: String,
    pub signature: Option<String>,
    pub birth_certificate: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
