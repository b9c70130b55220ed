//! Remote media storage client
//!
//! Employee photos are not kept locally; bytes go to a remote media
//! service which answers with a durable retrieval URL. Uploads are a
//! single POST with no retry.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use shared::models::MediaAsset;

/// Media service error
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media upload failed: {0}")]
    Upload(String),

    #[error("Media service returned status {0}")]
    Status(u16),

    #[error("Invalid media service response: {0}")]
    Response(String),

    #[error("Media client configuration error: {0}")]
    Client(String),
}

/// Binary asset hosting collaborator
///
/// The one seam the employee lifecycle needs from media hosting:
/// store bytes, get back a URL.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<MediaAsset, MediaError>;
}

/// HTTP media service client
#[derive(Debug, Clone)]
pub struct RemoteMediaStore {
    client: reqwest::Client,
    upload_url: String,
}

impl RemoteMediaStore {
    pub fn new(upload_url: impl Into<String>, timeout: Duration) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MediaError::Client(e.to_string()))?;
        Ok(Self {
            client,
            upload_url: upload_url.into(),
        })
    }
}

#[async_trait]
impl MediaStore for RemoteMediaStore {
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<MediaAsset, MediaError> {
        let mime = mime_guess::from_path(filename).first_or_octet_stream();
        let size = bytes.len();

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime.as_ref())
            .map_err(|e| MediaError::Upload(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MediaError::Status(response.status().as_u16()));
        }

        let asset: MediaAsset = response
            .json()
            .await
            .map_err(|e| MediaError::Response(e.to_string()))?;

        tracing::info!(
            filename = %filename,
            size = size,
            url = %asset.url,
            "Photo uploaded to media service"
        );

        Ok(asset)
    }
}
