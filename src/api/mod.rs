//! REST API module.
//!
//! Contains all API routes and handlers behind the `/api` prefix. Bodies are
//! plain JSON entities; errors are a JSON `{message}` with the mapped status.

mod announcements;
mod applications;
mod auth;
mod events;
mod gallery;
mod team;

pub use announcements::*;
pub use applications::*;
pub use auth::*;
pub use events::*;
pub use gallery::*;
pub use team::*;

use std::collections::HashMap;

use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::AppState;

/// Confirmation body for delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}

/// An image file submitted alongside form fields.
pub struct UploadedImage {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Text fields plus the optional `image` file from a multipart form.
#[derive(Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    pub image: Option<UploadedImage>,
}

impl FormData {
    /// Raw field value, if the field was present in the form.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }

    /// Required create field: must be present and non-empty.
    pub fn required(&self, name: &str) -> Result<String, AppError> {
        match self.field(name) {
            Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
            _ => Err(AppError::Validation(format!("{} is required", name))),
        }
    }

    /// Required update field: absent keeps the prior value, present must be
    /// non-empty.
    pub fn updated(&self, name: &str) -> Result<Option<String>, AppError> {
        match self.field(name) {
            None => Ok(None),
            Some(value) if value.trim().is_empty() => {
                Err(AppError::Validation(format!("{} cannot be empty", name)))
            }
            Some(value) => Ok(Some(value.to_string())),
        }
    }

    /// Clearable optional field: absent keeps the prior value (`None`), an
    /// empty value clears it (`Some(None)`), anything else sets it.
    pub fn optional(&self, name: &str) -> Option<Option<String>> {
        self.field(name).map(|value| {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        })
    }
}

/// Drain a multipart form into text fields plus the optional `image` file.
pub async fn collect_form(mut multipart: Multipart) -> Result<FormData, AppError> {
    let mut form = FormData::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?
    {
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };

        if name == "image" && field.file_name().is_some() {
            let filename = field
                .file_name()
                .unwrap_or("upload")
                .to_string();
            let content_type = field.content_type().map(|s| s.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?
                .to_vec();

            form.image = Some(UploadedImage {
                filename,
                content_type,
                bytes,
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Malformed form data: {}", e)))?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

/// Upload the form's image file, if any, and return its hosted URL.
/// A new upload always wins over any client-supplied URL field.
pub async fn store_image(state: &AppState, form: &FormData) -> Result<Option<String>, AppError> {
    let Some(image) = &form.image else {
        return Ok(None);
    };

    let Some(media) = &state.media else {
        return Err(AppError::Media("media storage is not configured".to_string()));
    };

    let url = media
        .upload(
            image.bytes.clone(),
            image.filename.clone(),
            image.content_type.clone(),
        )
        .await?;

    Ok(Some(url))
}

/// Required field in a JSON body: present and non-empty.
pub(crate) fn required_json(value: Option<String>, name: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} is required", name))),
    }
}
