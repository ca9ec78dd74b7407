//! Auth API endpoints.

use axum::{extract::State, Json};
use chrono::Duration;

use crate::auth;
use crate::errors::AppError;
use crate::models::{LoginRequest, LoginResponse};
use crate::AppState;

/// POST /api/auth/login - Validate admin credentials and issue a token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    // Same response for unknown email and wrong password.
    let user = state
        .repo
        .get_admin_by_email(&email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    if !auth::verify_password(&password, &user.password_hash) {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = auth::issue_token(
        &state.jwt_secret,
        &user,
        Duration::hours(state.config.token_ttl_hours),
    )?;

    Ok(Json(LoginResponse {
        token,
        name: user.name,
        email: user.email,
        role: user.role,
    }))
}
