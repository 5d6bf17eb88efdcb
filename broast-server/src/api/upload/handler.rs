//! Payment Proof Upload Handler
//!
//! Accepts payment screenshot uploads from checkout. Supports multiple
//! image formats (PNG, JPEG, WebP), converts to JPG, and dedups identical
//! screenshots by content hash. The returned URL is the proof reference the
//! client attaches to its checkout session.

use axum::Json;
use axum::extract::{Multipart, Path as UrlPath, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use image::DynamicImage;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::{fs, io::Cursor};
use uuid::Uuid;

use crate::audit_log;
use crate::core::ServerState;
use crate::utils::error::ok;
use crate::utils::{AppError, AppResponse};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// JPEG quality for recompressed proofs (85% keeps text on screenshots
/// legible while controlling file size)
const JPEG_QUALITY: u8 = 85;

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub file_id: String,
    pub filename: String,
    pub original_name: String,
    pub size: usize,
    pub format: String,
    /// Proof reference to attach to the checkout session
    pub url: String,
}

/// Calculate SHA256 hash of data
fn calculate_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Find existing file by content hash
fn find_file_by_hash(proofs_dir: &Path, hash: &str) -> Option<String> {
    let hash_dir = proofs_dir.join("by_hash");
    if !hash_dir.exists() {
        return None;
    }

    // Hash directory uses first 2 chars as subdir (e.g., "ab/abc123...")
    let prefix = &hash[..2];
    let hash_path = hash_dir.join(format!("{}/{}", prefix, hash));

    if hash_path.exists()
        && let Ok(target) = fs::read_link(&hash_path)
    {
        return target.file_name().map(|s| s.to_string_lossy().to_string());
    }
    None
}

/// Create hash-based symlink for deduplication
fn create_hash_symlink(proofs_dir: &Path, hash: &str, filename: &str) -> Result<(), AppError> {
    let hash_dir = proofs_dir.join("by_hash");
    let prefix = &hash[..2];
    let hash_subdir = hash_dir.join(prefix);
    fs::create_dir_all(&hash_subdir)
        .map_err(|e| AppError::internal(format!("Failed to create hash subdir: {}", e)))?;

    // Symlink lives two levels below the proofs dir (by_hash/<prefix>/)
    let hash_path = hash_subdir.join(hash);
    let target_path = PathBuf::from("../../").join(filename);

    symlink::symlink_auto(&target_path, &hash_path)
        .map_err(|e| AppError::internal(format!("Failed to create symlink: {}", e)))?;

    Ok(())
}

/// Recompress the proof as JPG
fn process_and_compress_image(data: Vec<u8>) -> Result<(DynamicImage, Vec<u8>), AppError> {
    let img = image::load_from_memory(&data)
        .map_err(|e| AppError::validation(format!("Invalid image: {}", e)))?;

    let mut buffer = Vec::new();
    {
        let mut cursor = Cursor::new(&mut buffer);
        let rgb_img = img.to_rgb8();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
        rgb_img
            .write_with_encoder(encoder)
            .map_err(|e| AppError::internal(format!("Failed to compress image: {}", e)))?;
    }

    Ok((img, buffer))
}

/// Validate a proof upload before processing
fn validate_image(data: &[u8], ext: &str) -> Result<(), AppError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {} bytes ({}MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    let ext_lower = ext.to_lowercase();
    if !SUPPORTED_FORMATS.contains(&ext_lower.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext_lower,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    // Verify it's actually an image by trying to load it
    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::validation(format!(
            "Invalid image file ({}): {}",
            ext_lower, e
        )));
    }

    Ok(())
}

/// POST /upload/ - 上传支付凭证
///
/// 任何失败都不产生凭证引用；客户端修正后重试。
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> Result<Json<AppResponse<UploadResponse>>, AppError> {
    let proofs_dir = state.config.proofs_dir();
    fs::create_dir_all(&proofs_dir)
        .map_err(|e| AppError::internal(format!("Failed to create proofs directory: {}", e)))?;

    // Find the file field
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;

    while let Some(f) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart request: {}", e)))?
    {
        let name = f.name().map(|s| s.to_string());
        if name.as_deref() == Some("file") || name.as_deref() == Some("") {
            original_filename = f.file_name().map(|s| s.to_string());
            field_data = Some(
                f.bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {}", e)))?
                    .to_vec(),
            );
            break;
        }
    }

    let data = field_data.ok_or_else(|| {
        AppError::validation("No 'file' field found. Field name must be 'file'".to_string())
    })?;

    let filename = original_filename
        .ok_or_else(|| AppError::validation("No filename provided in file field".to_string()))?;

    if data.is_empty() {
        return Err(AppError::validation("Empty file provided".to_string()));
    }

    let ext = PathBuf::from(&filename)
        .extension()
        .and_then(|ext| ext.to_str().map(|s| s.to_string()))
        .ok_or_else(|| AppError::validation(format!("Invalid file extension for: {}", filename)))?;

    validate_image(&data, &ext)?;

    let (_original_img, compressed_data) = process_and_compress_image(data)?;

    // Dedup: the same screenshot uploaded twice resolves to one file
    let file_hash = calculate_hash(&compressed_data);
    if let Some(existing_filename) = find_file_by_hash(&proofs_dir, &file_hash) {
        tracing::info!(
            original_name = %filename,
            existing_file = %existing_filename,
            "Duplicate proof detected, returning existing file"
        );

        let file_id = existing_filename
            .strip_suffix(".jpg")
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let url = format!("/api/proof/{}", existing_filename);
        let response = UploadResponse {
            file_id,
            filename: existing_filename,
            original_name: filename,
            size: compressed_data.len(),
            format: "jpg".to_string(),
            url,
        };

        return Ok(ok(response));
    }

    // Generate unique filename for new file
    let file_id = Uuid::new_v4().to_string();
    let new_filename = format!("{}.jpg", file_id);
    let file_path = proofs_dir.join(&new_filename);

    fs::write(&file_path, &compressed_data)
        .map_err(|e| AppError::internal(format!("Failed to save file: {}", e)))?;

    create_hash_symlink(&proofs_dir, &file_hash, &new_filename)?;

    audit_log!(
        "storefront",
        "upload_proof",
        &file_id,
        format!("Uploaded payment proof: {} -> {}", filename, new_filename)
    );

    tracing::info!(
        original_name = %filename,
        size = %compressed_data.len(),
        hash = %file_hash,
        "Payment proof uploaded"
    );

    let url = format!("/api/proof/{}", new_filename);
    let response = UploadResponse {
        file_id,
        filename: new_filename,
        original_name: filename,
        size: compressed_data.len(),
        format: "jpg".to_string(),
        url,
    };

    Ok(ok(response))
}

/// GET /api/proof/:filename - 获取已上传的支付凭证
pub async fn serve(
    State(state): State<ServerState>,
    UrlPath(filename): UrlPath<String>,
) -> Result<Response, AppError> {
    // Filenames are server-generated UUIDs; anything else is rejected
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(AppError::invalid("Invalid proof filename".to_string()));
    }

    let path = state.config.proofs_dir().join(&filename);
    let data = tokio::fs::read(&path)
        .await
        .map_err(|_| AppError::not_found(format!("Proof {}", filename)))?;

    let mime = mime_guess::from_path(&filename).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.to_string())], data).into_response())
}
