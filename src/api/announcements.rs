//! Announcement API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::{message, required_json, MessageResponse};
use crate::errors::AppError;
use crate::models::{Announcement, CreateAnnouncementRequest};
use crate::AppState;

/// GET /api/announcements - List all announcements, newest first.
pub async fn list_announcements(
    State(state): State<AppState>,
) -> Result<Json<Vec<Announcement>>, AppError> {
    Ok(Json(state.repo.list_announcements().await?))
}

/// POST /api/announcements - Create an announcement.
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(request): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<Announcement>), AppError> {
    let title = required_json(request.title, "title")?;
    let body = required_json(request.message, "message")?;

    let announcement = state.repo.create_announcement(&title, &body).await?;

    Ok((StatusCode::CREATED, Json(announcement)))
}

/// DELETE /api/announcements/{id} - Delete an announcement.
pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.repo.delete_announcement(&id).await?;
    Ok(message("Announcement removed"))
}
