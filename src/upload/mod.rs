//! Image upload endpoint
//!
//! `POST /api/upload` accepts a multipart form with a single `file`
//! field, optionally compresses the PNG and writes it under the public
//! customers directory. The response carries the public path the
//! client stores in its hidden `image_url` form field.
//!
//! The endpoint performs no MIME-type or size validation; the filename
//! is reduced to its final path component and otherwise used as-is, so
//! a second upload with the same name overwrites the first.

pub mod compress;

use crate::actions::AppState;
use crate::config::UploadConfig;
use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Successful upload response: the public path of the stored image
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

/// Upload failures
///
/// The classification is internal (it is logged); the wire response is
/// always the generic `{"error": "Error uploading file."}` body with
/// status 500.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid multipart body: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("multipart body has no `file` field")]
    MissingFile,

    #[error("uploaded part has no usable filename")]
    MissingFilename,

    #[error(transparent)]
    Compress(#[from] compress::CompressError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "upload failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Error uploading file." })),
        )
            .into_response()
    }
}

/// Handle `POST /api/upload`
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_owned)
            .ok_or(UploadError::MissingFilename)?;
        let data = field.bytes().await?;

        let image_path = store_image(&state.upload, &file_name, &data).await?;
        return Ok(Json(UploadResponse { image_path }));
    }

    Err(UploadError::MissingFile)
}

/// Write the (optionally compressed) bytes under the customers
/// directory and return the public path
pub async fn store_image(
    config: &UploadConfig,
    file_name: &str,
    data: &[u8],
) -> Result<String, UploadError> {
    let name = destination_name(file_name).ok_or(UploadError::MissingFilename)?;

    let bytes = match &config.compression {
        Some(compression) => compress::compress_png(data, compression.quality)?,
        None => data.to_vec(),
    };

    let dir = config.customers_dir();
    tokio::fs::create_dir_all(&dir).await?;

    // Collisions are not handled: last write wins.
    let dest = dir.join(&name);
    tokio::fs::write(&dest, &bytes).await?;

    tracing::info!(file = %name, bytes = bytes.len(), "stored uploaded image");

    Ok(format!(
        "{}/{}",
        config.route_prefix.trim_end_matches('/'),
        name
    ))
}

/// Reduce a client-supplied filename to its final path component
fn destination_name(file_name: &str) -> Option<String> {
    let name = file_name.rsplit(['/', '\\']).next()?;
    if name.is_empty() || name == "." || name == ".." {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name_plain_filename() {
        assert_eq!(destination_name("avatar.png"), Some("avatar.png".to_string()));
    }

    #[test]
    fn test_destination_name_strips_directories() {
        assert_eq!(
            destination_name("../../etc/avatar.png"),
            Some("avatar.png".to_string())
        );
        assert_eq!(
            destination_name("C:\\Users\\me\\avatar.png"),
            Some("avatar.png".to_string())
        );
    }

    #[test]
    fn test_destination_name_rejects_empty_and_dots() {
        assert_eq!(destination_name(""), None);
        assert_eq!(destination_name("uploads/"), None);
        assert_eq!(destination_name(".."), None);
        assert_eq!(destination_name("."), None);
    }

    #[tokio::test]
    async fn test_store_image_writes_verbatim_without_compression() {
        let tmp = tempfile::tempdir().unwrap();
        let config = UploadConfig {
            public_dir: tmp.path().to_path_buf(),
            ..UploadConfig::default()
        };

        let path = store_image(&config, "avatar.png", b"raw bytes").await.unwrap();

        assert_eq!(path, "/customers/avatar.png");
        let written = tokio::fs::read(tmp.path().join("customers/avatar.png"))
            .await
            .unwrap();
        assert_eq!(written, b"raw bytes");
    }

    #[tokio::test]
    async fn test_store_image_last_write_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let config = UploadConfig {
            public_dir: tmp.path().to_path_buf(),
            ..UploadConfig::default()
        };

        store_image(&config, "avatar.png", b"first").await.unwrap();
        store_image(&config, "avatar.png", b"second").await.unwrap();

        let written = tokio::fs::read(tmp.path().join("customers/avatar.png"))
            .await
            .unwrap();
        assert_eq!(written, b"second");
    }

    #[tokio::test]
    async fn test_store_image_compression_rejects_non_png() {
        let tmp = tempfile::tempdir().unwrap();
        let config = UploadConfig {
            public_dir: tmp.path().to_path_buf(),
            compression: Some(crate::config::CompressionConfig { quality: 80 }),
            ..UploadConfig::default()
        };

        let result = store_image(&config, "avatar.png", b"not a png").await;
        assert!(matches!(result, Err(UploadError::Compress(_))));
    }
}
