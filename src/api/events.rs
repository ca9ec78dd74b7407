//! Event API endpoints.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use super::{collect_form, message, store_image, MessageResponse};
use crate::errors::AppError;
use crate::models::{CreateEventRequest, Event, EventStatus, UpdateEventRequest};
use crate::AppState;

/// GET /api/events - List all events, soonest first.
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.repo.list_events().await?))
}

/// GET /api/events/{id} - Get a single event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    state
        .repo
        .get_event(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}

/// POST /api/events - Create an event (multipart form, optional image file).
pub async fn create_event(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let form = collect_form(multipart).await?;

    let title = form.required("title")?;
    let description = form.required("description")?;
    let date = form.required("date")?;
    validate_date(&date)?;
    let venue = form.required("venue")?;
    let registration_link = form.optional("registrationLink").flatten();

    let status = match form.field("status") {
        None => EventStatus::Upcoming,
        Some(value) if value.is_empty() => EventStatus::Upcoming,
        Some(value) => parse_status(value)?,
    };

    // An uploaded file wins over any imageUrl text field.
    let image_url = match store_image(&state, &form).await? {
        Some(url) => Some(url),
        None => form.optional("imageUrl").flatten(),
    };

    let event = state
        .repo
        .create_event(&CreateEventRequest {
            title,
            description,
            date,
            venue,
            image_url,
            registration_link,
            status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/{id} - Update an event. Absent fields keep their values.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Json<Event>, AppError> {
    let form = collect_form(multipart).await?;

    let date = form.updated("date")?;
    if let Some(value) = &date {
        validate_date(value)?;
    }

    let status = match form.field("status") {
        None => None,
        Some(value) => Some(parse_status(value)?),
    };

    let image_url = match store_image(&state, &form).await? {
        Some(url) => Some(Some(url)),
        None => form.optional("imageUrl"),
    };

    let request = UpdateEventRequest {
        title: form.updated("title")?,
        description: form.updated("description")?,
        date,
        venue: form.updated("venue")?,
        image_url,
        registration_link: form.optional("registrationLink"),
        status,
    };

    Ok(Json(state.repo.update_event(&id, &request).await?))
}

/// DELETE /api/events/{id} - Delete an event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.repo.delete_event(&id).await?;
    Ok(message("Event removed"))
}

fn parse_status(value: &str) -> Result<EventStatus, AppError> {
    EventStatus::from_str(value).ok_or_else(|| {
        AppError::Validation("status must be 'upcoming' or 'completed'".to_string())
    })
}

fn validate_date(value: &str) -> Result<(), AppError> {
    let parseable = chrono::DateTime::parse_from_rfc3339(value).is_ok()
        || chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok();

    if parseable {
        Ok(())
    } else {
        Err(AppError::Validation(
            "date must be an ISO 8601 date".to_string(),
        ))
    }
}
