use axum::{
    Router,
    body::Body,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::Response,
    routing::get,
};
use serde::Deserialize;
use tokio::fs;

use crate::config::APP_CONFIG;
use crate::error::ApiError;
use crate::storage;

pub fn create_route() -> Router {
    Router::new().route("/uploads/{folder}/{file}", get(serve_upload))
}

#[derive(Debug, Deserialize)]
pub struct FileAccessQuery {
    pub token: Option<String>,
}

fn guess_content_type(file: &str) -> &'static str {
    match file.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

/// Serves a stored upload. Protected document folders require a valid
/// short-lived token scoped to the exact file being fetched; everything
/// else is public.
#[utoipa::path(
    get,
    path = "/uploads/{folder}/{file}",
    params(
        ("folder" = String, Path, description = "Document folder"),
        ("file" = String, Path, description = "File name"),
        ("token" = Option<String>, Query, description = "Access token for protected folders")
    ),
    responses(
        (status = 200, description = "File content"),
        (status = 403, description = "Missing or invalid access token"),
        (status = 404, description = "File not found")
    ),
    tag = "Files"
)]
pub async fn serve_upload(
    Path((folder, file)): Path<(String, String)>,
    Query(query): Query<FileAccessQuery>,
) -> Result<Response, ApiError> {
    // Path segments never traverse out of the upload root.
    if folder.contains("..") || folder.contains('/') || file.contains("..") || file.contains('/') {
        return Err(ApiError::not_found("File not found"));
    }

    if storage::is_protected_folder(&folder) {
        let token = query
            .token
            .as_deref()
            .ok_or_else(|| ApiError::forbidden("Access token required"))?;
        let relative_path = format!("{}/{}", folder, file);
        storage::verify_signed_token(token, &relative_path)
            .map_err(|_| ApiError::forbidden("Invalid or expired access token"))?;
    }

    let file_path = format!("{}/{}/{}", APP_CONFIG.upload_dir, folder, file);
    let contents = fs::read(&file_path)
        .await
        .map_err(|_| ApiError::not_found("File not found"))?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, guess_content_type(&file))
        .body(Body::from(contents))
        .map_err(|e| ApiError::internal(format!("Failed to build file response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_guess() {
        assert_eq!(guess_content_type("scan.pdf"), "application/pdf");
        assert_eq!(guess_content_type("photo.jpeg"), "image/jpeg");
        assert_eq!(guess_content_type("noext"), "application/octet-stream");
    }
}
