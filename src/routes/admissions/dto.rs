use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Caste {
    BC,
    SC,
    ST,
    OC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Behavior {
    Mild,
    Normal,
    Hyperactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentSection {
    pub name: String,
    pub dob: NaiveDate,
    pub aadhar_no: String,
    pub gender: Gender,
    #[serde(default)]
    pub place_of_birth: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub caste: Option<Caste>,
    #[serde(default)]
    pub mother_tongue: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub identification_marks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressSection {
    pub residential_address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParentSection {
    pub name: String,
    pub mobile: String,
    #[serde(default)]
    pub aadhar_no: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionDetailsSection {
    pub class: String,
    pub academic_year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviousSchool {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub year_of_study: Option<String>,
    #[serde(default)]
    pub percentage_or_grade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppraisalSection {
    #[serde(default)]
    pub achievements: Option<String>,
    #[serde(default)]
    pub behavior: Option<Behavior>,
    #[serde(default)]
    pub health_history: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuardianSection {
    pub name: String,
}

/// The whole multipart submission as one typed schema. The stringified
/// section fields are assembled into a single JSON object and deserialized
/// exactly once; required sections and fields live in the type itself.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionForm {
    pub student: StudentSection,
    pub address: AddressSection,
    pub father: ParentSection,
    pub mother: ParentSection,
    pub admission_details: AdmissionDetailsSection,
    #[serde(default)]
    pub previous_academic_record: Vec<PreviousSchool>,
    #[serde(default)]
    pub appraisal: Option<AppraisalSection>,
    pub parent_guardian: GuardianSection,
}

impl AdmissionForm {
    /// Catches required fields that parsed but hold only whitespace. The
    /// caller reports a single aggregate error, not a per-field list.
    pub fn has_blank_required_field(&self) -> bool {
        [
            self.student.name.as_str(),
            self.student.aadhar_no.as_str(),
            self.address.residential_address.as_str(),
            self.father.name.as_str(),
            self.father.mobile.as_str(),
            self.mother.name.as_str(),
            self.mother.mobile.as_str(),
            self.admission_details.class.as_str(),
            self.admission_details.academic_year.as_str(),
            self.parent_guardian.name.as_str(),
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAdmissionResponse {
    pub message: String,
    pub form_no: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionResponse {
    pub admission_id: String,
    pub form_no: String,
    pub admission_no: Option<String>,
    #[schema(value_type = Object)]
    pub student: serde_json::Value,
    #[schema(value_type = Object)]
    pub address: serde_json::Value,
    #[schema(value_type = Object)]
    pub father: serde_json::Value,
    #[schema(value_type = Object)]
    pub mother: serde_json::Value,
    #[schema(value_type = Object)]
    pub admission_details: serde_json::Value,
    #[schema(value_type = Object)]
    pub previous_academic_record: serde_json::Value,
    #[schema(value_type = Object)]
    pub appraisal: Option<serde_json::Value>,
    #[schema(value_type = Object)]
    pub parent_guardian: serde_json::Value,
    pub photo: String,
    /// Signed, time-limited URL; the durable location is never exposed.
    pub aadhar: String,
    pub signature: Option<String>,
    pub birth_certificate: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignAdmissionNoRequest {
    #[schema(example = "ADM-2025-0042")]
    pub admission_no: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignAdmissionNoResponse {
    pub message: String,
    pub admission_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_form() -> serde_json::Value {
        json!({
            "student": {"name": "A", "dob": "2015-01-01", "aadharNo": "1234", "gender": "Male"},
            "address": {"residentialAddress": "X"},
            "father": {"name": "F", "mobile": "999"},
            "mother": {"name": "M", "mobile": "888"},
            "admissionDetails": {"class": "LKG", "academicYear": "2025-2026"},
            "parentGuardian": {"name": "F"}
        })
    }

    #[test]
    fn test_minimal_valid_form_parses() {
        let form: AdmissionForm = serde_json::from_value(full_form()).unwrap();
        assert!(!form.has_blank_required_field());
        assert_eq!(form.student.gender, Gender::Male);
        assert!(form.previous_academic_record.is_empty());
        assert!(form.appraisal.is_none());
    }

    #[test]
    fn test_missing_section_fails() {
        let mut value = full_form();
        value.as_object_mut().unwrap().remove("mother");
        assert!(serde_json::from_value::<AdmissionForm>(value).is_err());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut value = full_form();
        value["father"].as_object_mut().unwrap().remove("mobile");
        assert!(serde_json::from_value::<AdmissionForm>(value).is_err());
    }

    #[test]
    fn test_blank_required_field_detected() {
        let mut value = full_form();
        value["admissionDetails"]["class"] = json!("   ");
        let form: AdmissionForm = serde_json::from_value(value).unwrap();
        assert!(form.has_blank_required_field());
    }

    #[test]
    fn test_invalid_gender_rejected() {
        let mut value = full_form();
        value["student"]["gender"] = json!("Other");
        assert!(serde_json::from_value::<AdmissionForm>(value).is_err());
    }

    #[test]
    fn test_optional_sections_accepted() {
        let mut value = full_form();
        value["previousAcademicRecord"] = json!([
            {"name": "Old School", "class": "Nursery", "yearOfStudy": "2023"}
        ]);
        value["appraisal"] = json!({"behavior": "Normal"});
        let form: AdmissionForm = serde_json::from_value(value).unwrap();
        assert_eq!(form.previous_academic_record.len(), 1);
        assert_eq!(form.appraisal.unwrap().behavior, Some(Behavior::Normal));
    }
}
