use axum::{
    Json, Router,
    extract::{Multipart, Path},
    http::StatusCode,
    routing::{get, patch, post},
};
use serde_json::Value;
use uuid::Uuid;

use super::dto::{
    AdmissionForm, AdmissionResponse, AssignAdmissionNoRequest, AssignAdmissionNoResponse,
    SubmitAdmissionResponse,
};
use crate::entities::admission;
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::middleware::permission;
use crate::repositories::{AdmissionRepository, NewAdmission};
use crate::storage;

const SECTION_FIELDS: &[&str] = &[
    "student",
    "address",
    "father",
    "mother",
    "admissionDetails",
    "previousAcademicRecord",
    "appraisal",
    "parentGuardian",
];

pub fn create_route() -> Router {
    Router::new()
        .route("/api/admissions", post(submit_admission).get(list_admissions))
        .route(
            "/api/admissions/{admission_id}/admission-no",
            patch(assign_admission_no),
        )
        .route("/api/admissions/{admission_id}", get(get_admission))
}

/// Submit admission endpoint - multipart intake of a full application
///
/// Validation order: parse each stringified section, check the aggregate
/// required set (fields and files), upload attachments, then persist. A
/// failure at any step aborts the whole submission; nothing is persisted
/// until every upload has a durable URL.
#[utoipa::path(
    post,
    path = "/api/admissions",
    responses(
        (status = 201, description = "Application submitted successfully", body = SubmitAdmissionResponse),
        (status = 400, description = "Malformed section or missing required data"),
        (status = 500, description = "Storage or database failure")
    ),
    tag = "Admissions"
)]
pub async fn submit_admission(
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmitAdmissionResponse>), ApiError> {
    let mut sections = serde_json::Map::new();
    let mut photo: Option<(String, Vec<u8>)> = None;
    let mut aadhar: Option<(String, Vec<u8>)> = None;
    let mut signature: Option<(String, Vec<u8>)> = None;
    let mut birth_certificate: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        if SECTION_FIELDS.contains(&field_name.as_str()) {
            let raw = field.text().await.map_err(|e| {
                ApiError::bad_request(format!("Failed to read {} field: {}", field_name, e))
            })?;
            let parsed: Value = serde_json::from_str(&raw).map_err(|_| {
                ApiError::bad_request(format!("Invalid JSON in {} field", field_name))
            })?;
            sections.insert(field_name, parsed);
            continue;
        }

        match field_name.as_str() {
            "photo" | "aadhar" | "signature" | "birthCertificate" => {
                let file_name = field.file_name().unwrap_or("document").to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::bad_request(format!("Failed to read {} file: {}", field_name, e))
                })?;
                let file = Some((file_name, data.to_vec()));
                match field_name.as_str() {
                    "photo" => photo = file,
                    "aadhar" => aadhar = file,
                    "signature" => signature = file,
                    _ => birth_certificate = file,
                }
            }
            _ => {}
        }
    }

    // One aggregate answer for everything required but absent, matching the
    // public contract of the form.
    let missing = ApiError::bad_request("All required fields must be provided.");

    let form: AdmissionForm =
        serde_json::from_value(Value::Object(sections)).map_err(|_| {
            ApiError::bad_request("All required fields must be provided.")
        })?;
    if form.has_blank_required_field() {
        return Err(missing);
    }
    let (Some(photo), Some(aadhar)) = (photo, aadhar) else {
        return Err(missing);
    };

    let storage_failure = |e: anyhow::Error| {
        tracing::error!("Admission upload failed: {}", e);
        ApiError::internal("An error occurred while processing your application.")
    };

    let photo_url = storage::save_upload("photos", &photo.0, &photo.1)
        .await
        .map_err(storage_failure)?;
    let aadhar_url = storage::save_upload("aadhar", &aadhar.0, &aadhar.1)
        .await
        .map_err(storage_failure)?;
    let signature_url = match signature {
        Some((file_name, data)) => Some(
            storage::save_upload("signatures", &file_name, &data)
                .await
                .map_err(storage_failure)?,
        ),
        None => None,
    };
    let birth_certificate_url = match birth_certificate {
        Some((file_name, data)) => Some(
            storage::save_upload("birth_certificates", &file_name, &data)
                .await
                .map_err(storage_failure)?,
        ),
        None => None,
    };

    let admission_repo = AdmissionRepository::new();
    let new_admission = NewAdmission {
        student: to_json(&form.student)?,
        address: to_json(&form.address)?,
        father: to_json(&form.father)?,
        mother: to_json(&form.mother)?,
        admission_details: to_json(&form.admission_details)?,
        previous_academic_record: to_json(&form.previous_academic_record)?,
        appraisal: match &form.appraisal {
            Some(appraisal) => Some(to_json(appraisal)?),
            None => None,
        },
        parent_guardian: to_json(&form.parent_guardian)?,
        photo: photo_url,
        aadhar: aadhar_url,
        signature: signature_url,
        birth_certificate: birth_certificate_url,
    };

    let saved = admission_repo.create(new_admission).await.map_err(|e| {
        tracing::error!("Failed to save admission: {}", e);
        ApiError::internal("An error occurred while processing your application.")
    })?;

    tracing::info!(form_no = %saved.form_no, "Admission application received");

    Ok((
        StatusCode::CREATED,
        Json(SubmitAdmissionResponse {
            message: "Application submitted successfully!".to_string(),
            form_no: saved.form_no,
        }),
    ))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Failed to serialize section: {}", e)))
}

fn to_response(model: admission::Model) -> Result<AdmissionResponse, ApiError> {
    // Sensitive identity documents go out behind a short-lived signed URL;
    // the photo keeps its durable location.
    let aadhar = storage::signed_document_url(&model.aadhar)
        .map_err(|e| ApiError::internal(format!("Failed to sign document URL: {}", e)))?;
    let birth_certificate = match &model.birth_certificate {
        Some(url) => Some(
            storage::signed_document_url(url)
                .map_err(|e| ApiError::internal(format!("Failed to sign document URL: {}", e)))?,
        ),
        None => None,
    };

    Ok(AdmissionResponse {
        admission_id: model.admission_id.to_string(),
        form_no: model.form_no,
        admission_no: model.admission_no,
        student: model.student,
        address: model.address,
        father: model.father,
        mother: model.mother,
        admission_details: model.admission_details,
        previous_academic_record: model.previous_academic_record,
        appraisal: model.appraisal,
        parent_guardian: model.parent_guardian,
        photo: model.photo,
        aadhar,
        signature: model.signature,
        birth_certificate,
        created_at: model.created_at,
    })
}

/// List admissions endpoint - admin only
#[utoipa::path(
    get,
    path = "/api/admissions",
    responses(
        (status = 200, description = "All applications", body = [AdmissionResponse]),
        (status = 401, description = "Missing token"),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Admissions"
)]
pub async fn list_admissions(
    AuthClaims(auth_claims): AuthClaims,
) -> Result<(StatusCode, Json<Vec<AdmissionResponse>>), ApiError> {
    permission::is_admin(&auth_claims)?;

    let admission_repo = AdmissionRepository::new();
    let admissions = admission_repo
        .find_all()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to fetch admissions: {}", e)))?;

    let responses = admissions
        .into_iter()
        .map(to_response)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((StatusCode::OK, Json(responses)))
}

/// Get one admission endpoint - admin only
#[utoipa::path(
    get,
    path = "/api/admissions/{admission_id}",
    params(("admission_id" = Uuid, Path, description = "Application id")),
    responses(
        (status = 200, description = "Application", body = AdmissionResponse),
        (status = 404, description = "Application not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admissions"
)]
pub async fn get_admission(
    AuthClaims(auth_claims): AuthClaims,
    Path(admission_id): Path<Uuid>,
) -> Result<(StatusCode, Json<AdmissionResponse>), ApiError> {
    permission::is_admin(&auth_claims)?;

    let admission_repo = AdmissionRepository::new();
    let admission = admission_repo
        .find_by_id(admission_id)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to fetch admission: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Admission not found"))?;

    Ok((StatusCode::OK, Json(to_response(admission)?)))
}

/// Assign admission number endpoint - the only post-creation mutation
#[utoipa::path(
    patch,
    path = "/api/admissions/{admission_id}/admission-no",
    params(("admission_id" = Uuid, Path, description = "Application id")),
    request_body = AssignAdmissionNoRequest,
    responses(
        (status = 200, description = "Admission number assigned", body = AssignAdmissionNoResponse),
        (status = 400, description = "Empty admission number"),
        (status = 404, description = "Application not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Admissions"
)]
pub async fn assign_admission_no(
    AuthClaims(auth_claims): AuthClaims,
    Path(admission_id): Path<Uuid>,
    Json(payload): Json<AssignAdmissionNoRequest>,
) -> Result<(StatusCode, Json<AssignAdmissionNoResponse>), ApiError> {
    permission::is_admin(&auth_claims)?;

    let admission_no = payload.admission_no.trim().to_string();
    if admission_no.is_empty() {
        return Err(ApiError::bad_request("Admission number is required"));
    }

    let admission_repo = AdmissionRepository::new();
    let updated = admission_repo
        .assign_admission_no(admission_id, admission_no)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to assign admission number: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Admission not found"))?;

    Ok((
        StatusCode::OK,
        Json(AssignAdmissionNoResponse {
            message: "Admission number assigned".to_string(),
            admission_no: updated.admission_no.unwrap_or_default(),
        }),
    ))
}
