use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::admission;
use crate::static_service::DATABASE_CONNECTION;
use crate::utils::form_no::generate_form_no;

/// Everything needed to persist one application: the parsed sections plus
/// the durable URLs of the uploaded documents.
pub struct NewAdmission {
    pub student: serde_json::Value,
    pub address: serde_json::Value,
    pub father: serde_json::Value,
    pub mother: serde_json::Value,
    pub admission_details: serde_json::Value,
    pub previous_academic_record: serde_json::Value,
    pub appraisal: Option<serde_json::Value>,
    pub parent_guardian: serde_json::Value,
    pub photo: String,
    pub aadhar: String,
    pub signature: Option<String>,
    pub birth_certificate: Option<String>,
}

pub struct AdmissionRepository;

impl AdmissionRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn create(&self, new_admission: NewAdmission) -> Result<admission::Model> {
        let db = self.get_connection();
        let admission_model = admission::ActiveModel {
            admission_id: Set(Uuid::new_v4()),
            form_no: Set(generate_form_no()),
            admission_no: Set(None),
            student: Set(new_admission.student),
            address: Set(new_admission.address),
            father: Set(new_admission.father),
            mother: Set(new_admission.mother),
            admission_details: Set(new_admission.admission_details),
            previous_academic_record: Set(new_admission.previous_academic_record),
            appraisal: Set(new_admission.appraisal),
            parent_guardian: Set(new_admission.parent_guardian),
            photo: Set(new_admission.photo),
            aadhar: Set(new_admission.aadhar),
            signature: Set(new_admission.signature),
            birth_certificate: Set(new_admission.birth_certificate),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let result = admission_model.insert(db).await?;
        Ok(result)
    }

    pub async fn find_all(&self) -> Result<Vec<admission::Model>> {
        let db = self.get_connection();
        let admissions = admission::Entity::find()
            .order_by_desc(admission::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(admissions)
    }

    pub async fn find_by_id(&self, admission_id: Uuid) -> Result<Option<admission::Model>> {
        let db = self.get_connection();
        let result = admission::Entity::find_by_id(admission_id).one(db).await?;
        Ok(result)
    }

    /// The admission number is the only field mutable after creation.
    /// Returns `None` when the application does not exist.
    pub async fn assign_admission_no(
        &self,
        admission_id: Uuid,
        admission_no: String,
    ) -> Result<Option<admission::Model>> {
        let db = self.get_connection();
        let Some(existing) = self.find_by_id(admission_id).await? else {
            return Ok(None);
        };

        let mut admission_model: admission::ActiveModel = existing.into();
        admission_model.admission_no = Set(Some(admission_no));

        let result = admission_model.update(db).await?;
        Ok(Some(result))
    }
}
