//! Team roster API endpoints.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use super::{collect_form, message, store_image, MessageResponse};
use crate::errors::AppError;
use crate::models::{CreateTeamMemberRequest, TeamMember, UpdateTeamMemberRequest};
use crate::AppState;

/// GET /api/team - List the team roster in display order.
pub async fn list_team(State(state): State<AppState>) -> Result<Json<Vec<TeamMember>>, AppError> {
    Ok(Json(state.repo.list_team_members().await?))
}

/// POST /api/team - Add a team member (multipart form, optional image file).
pub async fn add_team_member(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<TeamMember>), AppError> {
    let form = collect_form(multipart).await?;

    let name = form.required("name")?;
    let role = form.required("role")?;
    let term = form.required("term")?;

    let display_order = match form.field("order") {
        None => 0,
        Some(value) if value.trim().is_empty() => 0,
        Some(value) => parse_order(value)?,
    };

    let image_url = match store_image(&state, &form).await? {
        Some(url) => Some(url),
        None => form.optional("imageUrl").flatten(),
    };

    let member = state
        .repo
        .create_team_member(&CreateTeamMemberRequest {
            name,
            role,
            term,
            image_url,
            display_order,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/team/{id} - Update a team member. Absent fields keep their values.
pub async fn update_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<TeamMember>, AppError> {
    let form = collect_form(multipart).await?;

    let display_order = match form.field("order") {
        None => None,
        Some(value) => Some(parse_order(value)?),
    };

    let image_url = match store_image(&state, &form).await? {
        Some(url) => Some(Some(url)),
        None => form.optional("imageUrl"),
    };

    let request = UpdateTeamMemberRequest {
        name: form.updated("name")?,
        role: form.updated("role")?,
        term: form.updated("term")?,
        image_url,
        display_order,
    };

    Ok(Json(state.repo.update_team_member(&id, &request).await?))
}

/// DELETE /api/team/{id} - Remove a team member.
pub async fn delete_team_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.repo.delete_team_member(&id).await?;
    Ok(message("Team member removed"))
}

fn parse_order(value: &str) -> Result<i64, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Validation("order must be an integer".to_string()))
}
