//! Hosted media storage collaborator.
//!
//! Image files accompanying create/update requests are forwarded to the
//! hosted storage account; the URL it returns becomes the stored imageUrl.
//! The server never decodes or transforms image bytes itself.

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::config::MediaConfig;
use crate::errors::AppError;

/// Client for the hosted media storage account.
pub struct MediaStore {
    http: reqwest::Client,
    config: MediaConfig,
}

impl MediaStore {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Upload one image and return its publicly resolvable URL.
    ///
    /// The request carries an SHA-256 signature over the signed params plus
    /// the account secret. Failures surface on the same request; no retries.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: String,
        content_type: Option<String>,
    ) -> Result<String, AppError> {
        let timestamp = Utc::now().timestamp().to_string();

        // Signed params in alphabetical order, secret appended.
        let to_sign = format!(
            "folder={}&timestamp={}{}",
            self.config.folder, timestamp, self.config.api_secret
        );
        let signature = hex::encode(Sha256::digest(to_sign.as_bytes()));

        let mut file_part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        if let Some(ct) = content_type {
            file_part = file_part.mime_str(&ct)?;
        }

        let form = reqwest::multipart::Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", self.config.folder.clone())
            .text("signature", signature)
            .part("file", file_part);

        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.config.cloud_name
        );

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            let detail = body["error"]["message"]
                .as_str()
                .unwrap_or("upload rejected")
                .to_string();
            tracing::error!("Media upload failed ({}): {}", status, detail);
            return Err(AppError::Media(detail));
        }

        body["secure_url"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| AppError::Media("upload response missing secure_url".to_string()))
    }
}
