use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::{APP_CONFIG, SIGNED_URL_TTL_SECONDS};
use crate::utils::random::generate_random_string;

/// Folders whose contents hold sensitive identity documents. Files under
/// these are never served from their durable URL; access goes through a
/// short-lived signed token instead.
const PROTECTED_FOLDERS: &[&str] = &["aadhar", "birth_certificates"];

pub fn is_protected_folder(folder: &str) -> bool {
    PROTECTED_FOLDERS.contains(&folder)
}

fn unique_file_name(original_name: &str) -> String {
    let sanitized = sanitize_filename::sanitize(original_name);
    let path = Path::new(sanitized.as_ref());
    let file_stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("file");
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S").to_string();
    let suffix = generate_random_string(6);

    if extension.is_empty() {
        format!("{}_{}_{}", file_stem, timestamp, suffix)
    } else {
        format!("{}_{}_{}.{}", file_stem, timestamp, suffix, extension)
    }
}

/// Buffers the whole attachment and writes it under a per-document-type
/// folder, returning the durable URL. Any I/O failure propagates so the
/// caller can abort its operation without partial state.
pub async fn save_upload(folder: &str, original_name: &str, data: &[u8]) -> Result<String> {
    let dir = format!("{}/{}", APP_CONFIG.upload_dir, folder);
    fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create upload directory {}", dir))?;

    let file_name = unique_file_name(original_name);
    let file_path = format!("{}/{}", dir, file_name);

    let mut file = fs::File::create(&file_path)
        .await
        .with_context(|| format!("Failed to create upload file {}", file_path))?;
    file.write_all(data)
        .await
        .context("Failed to write upload data")?;
    file.flush().await.context("Failed to flush upload file")?;

    Ok(format!(
        "{}/uploads/{}/{}",
        APP_CONFIG.public_base_url, folder, file_name
    ))
}

#[derive(Debug, Serialize, Deserialize)]
struct SignedUrlClaims {
    file: String,
    exp: i64,
}

fn sign_file_token_with(secret: &str, file: &str, expires_in: i64) -> Result<String> {
    let claims = SignedUrlClaims {
        file: file.to_string(),
        exp: chrono::Utc::now().timestamp() + expires_in,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to sign file access token")
}

fn verify_file_token_with(secret: &str, token: &str, file: &str) -> Result<()> {
    let data = decode::<SignedUrlClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .context("Invalid or expired file access token")?;

    if data.claims.file != file {
        return Err(anyhow!("File access token does not match requested file"));
    }
    Ok(())
}

/// Exchanges a durable protected-document URL for a URL carrying a
/// short-lived access token. The durable URL itself is never exposed to
/// callers of the admin listing.
pub fn signed_document_url(durable_url: &str) -> Result<String> {
    let relative = durable_url
        .split_once("/uploads/")
        .map(|(_, rest)| rest)
        .ok_or_else(|| anyhow!("Unexpected document URL shape: {}", durable_url))?;

    let token = sign_file_token_with(&APP_CONFIG.jwt_secret, relative, SIGNED_URL_TTL_SECONDS)?;
    Ok(format!("{}?token={}", durable_url, token))
}

/// Validates the `token` query parameter of a protected-file request
/// against the `{folder}/{file}` being fetched.
pub fn verify_signed_token(token: &str, relative_path: &str) -> Result<()> {
    verify_file_token_with(&APP_CONFIG.jwt_secret, token, relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_folders() {
        assert!(is_protected_folder("aadhar"));
        assert!(is_protected_folder("birth_certificates"));
        assert!(!is_protected_folder("photos"));
        assert!(!is_protected_folder("profiles"));
    }

    #[test]
    fn test_unique_file_name_keeps_extension_and_sanitizes() {
        let name = unique_file_name("../..//etc/passwd.pdf");
        assert!(name.ends_with(".pdf"));
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));

        let bare = unique_file_name("scan");
        assert!(!bare.contains('.'));
    }

    #[test]
    fn test_file_token_round_trip() {
        let token = sign_file_token_with("secret", "aadhar/doc.pdf", 3600).unwrap();
        assert!(verify_file_token_with("secret", &token, "aadhar/doc.pdf").is_ok());

        // Wrong file
        assert!(verify_file_token_with("secret", &token, "aadhar/other.pdf").is_err());
        // Wrong secret
        assert!(verify_file_token_with("nope", &token, "aadhar/doc.pdf").is_err());
    }

    #[test]
    fn test_expired_file_token_rejected() {
        let token = sign_file_token_with("secret", "aadhar/doc.pdf", -120).unwrap();
        assert!(verify_file_token_with("secret", &token, "aadhar/doc.pdf").is_err());
    }
}
