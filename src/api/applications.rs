//! Membership application API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::required_json;
use crate::errors::AppError;
use crate::models::{
    Application, ApplicationStatus, ApplicationStatusView, CreateApplicationRequest,
    NewApplication, UpdateApplicationStatusRequest,
};
use crate::AppState;

/// POST /api/applications - Submit a membership application (public).
pub async fn submit_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let application = NewApplication {
        name: required_json(request.name, "name")?,
        email: required_json(request.email, "email")?,
        student_id: required_json(request.student_id, "studentId")?,
        department: required_json(request.department, "department")?,
        year: required_json(request.year, "year")?,
        skills: required_json(request.skills, "skills")?,
    };

    let created = state.repo.create_application(&application).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/applications - List all applications, newest first.
pub async fn list_applications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Application>>, AppError> {
    Ok(Json(state.repo.list_applications().await?))
}

/// PUT /api/applications/{id}/status - Set an application's review status.
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<Application>, AppError> {
    let status = request
        .status
        .as_deref()
        .and_then(ApplicationStatus::from_str)
        .ok_or_else(|| {
            AppError::Validation(
                "status must be 'pending', 'approved' or 'rejected'".to_string(),
            )
        })?;

    Ok(Json(
        state.repo.update_application_status(&id, status).await?,
    ))
}

/// GET /api/applications/status/{studentId} - Public status lookup.
pub async fn get_application_status(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<ApplicationStatusView>, AppError> {
    let application = state
        .repo
        .find_application_by_student_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No application found with this ID".to_string()))?;

    Ok(Json(ApplicationStatusView {
        name: application.name,
        status: application.status,
    }))
}
