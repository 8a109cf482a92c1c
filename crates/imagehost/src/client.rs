//! HTTP client for the image-hosting upload endpoint.
//!
//! Wraps the host's unsigned upload API (multipart file + preset + folder)
//! using [`reqwest`].

use serde::Deserialize;

use filmgrain_core::delivery::optimize_delivery_url;

/// Folder for film poster uploads.
pub const POSTERS_FOLDER: &str = "posters";

/// Folder for frame image uploads.
pub const FRAMES_FOLDER: &str = "frames";

/// Configuration for the image host, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ImageHostConfig {
    /// Full upload endpoint URL,
    /// e.g. `https://api.host.com/v1_1/my-cloud/image/upload`.
    pub upload_url: String,
    /// Unsigned upload preset identifier sent with every upload.
    pub upload_preset: String,
}

impl ImageHostConfig {
    /// Load image host configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default              |
    /// |----------------------------|----------|----------------------|
    /// | `IMAGE_HOST_UPLOAD_URL`    | **yes**  | --                   |
    /// | `IMAGE_HOST_UPLOAD_PRESET` | no       | `filmgrain_unsigned` |
    ///
    /// # Panics
    ///
    /// Panics if `IMAGE_HOST_UPLOAD_URL` is not set -- uploads cannot work
    /// without it and misconfiguration should fail at startup.
    pub fn from_env() -> Self {
        let upload_url = std::env::var("IMAGE_HOST_UPLOAD_URL")
            .expect("IMAGE_HOST_UPLOAD_URL must be set in the environment");

        let upload_preset = std::env::var("IMAGE_HOST_UPLOAD_PRESET")
            .unwrap_or_else(|_| "filmgrain_unsigned".into());

        Self {
            upload_url,
            upload_preset,
        }
    }
}

/// A successfully hosted image.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Canonical URL exactly as returned by the host.
    pub secure_url: String,
    /// URL rewritten for automatic quality/format delivery. This is the
    /// value records store.
    pub delivery_url: String,
}

/// JSON payload returned by the upload endpoint on success.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Errors from the image host layer.
#[derive(Debug, thiserror::Error)]
pub enum ImageHostError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host returned a non-2xx status code.
    #[error("Image upload failed ({status}): {body}")]
    UploadFailed {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The host answered 2xx but the body was not the expected JSON.
    #[error("Unexpected upload response: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the image-hosting endpoint.
pub struct ImageHostClient {
    client: reqwest::Client,
    config: ImageHostConfig,
}

impl ImageHostClient {
    /// Create a new client for the configured upload endpoint.
    pub fn new(config: ImageHostConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, config: ImageHostConfig) -> Self {
        Self { client, config }
    }

    /// Upload one file, returning its hosted URLs.
    ///
    /// Sends a multipart POST with the file bytes, the fixed upload preset,
    /// and the target `folder`. Any non-2xx response is an
    /// [`ImageHostError::UploadFailed`] carrying the raw body. On success the
    /// returned secure URL is rewritten via
    /// [`optimize_delivery_url`] before being handed back.
    pub async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        folder: &str,
    ) -> Result<UploadedImage, ImageHostError> {
        let size = bytes.len();
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", folder.to_string());

        let response = self
            .client
            .post(&self.config.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageHostError::UploadFailed {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageHostError::InvalidResponse(e.to_string()))?;

        let delivery_url = optimize_delivery_url(&parsed.secure_url);

        tracing::info!(
            filename = %filename,
            folder = %folder,
            size_bytes = size,
            url = %delivery_url,
            "Image uploaded",
        );

        Ok(UploadedImage {
            secure_url: parsed.secure_url,
            delivery_url,
        })
    }
}
