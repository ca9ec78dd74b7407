//! Gallery API endpoints.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use super::{collect_form, message, store_image, MessageResponse};
use crate::errors::AppError;
use crate::models::{CreateGalleryImageRequest, GalleryImage};
use crate::AppState;

/// GET /api/gallery - List all gallery images, newest first, with the
/// referenced event's title resolved for display.
pub async fn list_gallery_images(
    State(state): State<AppState>,
) -> Result<Json<Vec<GalleryImage>>, AppError> {
    Ok(Json(state.repo.list_gallery_images().await?))
}

/// POST /api/gallery - Add a gallery image (file upload or imageUrl field).
pub async fn add_gallery_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<GalleryImage>), AppError> {
    let form = collect_form(multipart).await?;

    // The event reference is stored as submitted; existence is only
    // resolved at display time.
    let event_id = form.optional("eventId").flatten();

    let image_url = match store_image(&state, &form).await? {
        Some(url) => url,
        None => form.optional("imageUrl").flatten().ok_or_else(|| {
            AppError::Validation("Please provide an image or image URL".to_string())
        })?,
    };

    let image = state
        .repo
        .create_gallery_image(&CreateGalleryImageRequest {
            image_url,
            event_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(image)))
}

/// DELETE /api/gallery/{id} - Delete a gallery image.
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.repo.delete_gallery_image(&id).await?;
    Ok(message("Image removed from gallery"))
}
