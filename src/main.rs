//! College Club Website Backend
//!
//! REST backend for the club site: public content, membership applications,
//! and the admin dashboard, with SQLite persistence and hosted media storage.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod media;
mod models;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use media::MediaStore;

/// Uploaded images can be a few megabytes; the axum default is too small.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub media: Option<Arc<MediaStore>>,
    pub config: Arc<Config>,
    /// Resolved token-signing secret (configured or ephemeral dev value).
    pub jwt_secret: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting College Club Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    let jwt_secret = match &config.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            tracing::warn!(
                "No token secret configured (CLUB_JWT_SECRET). Using an ephemeral secret; logins will not survive a restart!"
            );
            uuid::Uuid::new_v4().to_string()
        }
    };

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Seed the admin account when credentials are configured
    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        let hash = auth::hash_password(password)?;
        repo.upsert_admin("Site Admin", email, &hash).await?;
        tracing::info!("Admin account ready: {}", email);
    }

    // Media storage collaborator
    let media = match config.media.clone() {
        Some(media_config) => Some(Arc::new(MediaStore::new(media_config))),
        None => {
            tracing::warn!(
                "Media storage not configured (CLOUDINARY_*). Image uploads are disabled."
            );
            None
        }
    };

    // Create application state
    let state = AppState {
        repo,
        media,
        config: Arc::new(config.clone()),
        jwt_secret,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the secret for the admin gate
    let jwt_secret = state.jwt_secret.clone();

    // Public routes
    let public_routes = Router::new()
        .route("/auth/login", post(api::login))
        .route("/events", get(api::list_events))
        .route("/events/{id}", get(api::get_event))
        .route("/announcements", get(api::list_announcements))
        .route("/gallery", get(api::list_gallery_images))
        .route("/team", get(api::list_team))
        .route("/applications", post(api::submit_application))
        .route(
            "/applications/status/{student_id}",
            get(api::get_application_status),
        );

    // Admin routes behind the token gate
    let admin_routes = Router::new()
        .route("/events", post(api::create_event))
        .route("/events/{id}", put(api::update_event))
        .route("/events/{id}", delete(api::delete_event))
        .route("/announcements", post(api::create_announcement))
        .route("/announcements/{id}", delete(api::delete_announcement))
        .route("/gallery", post(api::add_gallery_image))
        .route("/gallery/{id}", delete(api::delete_gallery_image))
        .route("/team", post(api::add_team_member))
        .route("/team/{id}", put(api::update_team_member))
        .route("/team/{id}", delete(api::delete_team_member))
        .route("/applications", get(api::list_applications))
        .route(
            "/applications/{id}/status",
            put(api::update_application_status),
        )
        .layer(middleware::from_fn(move |req, next| {
            auth::require_admin(jwt_secret.clone(), req, next)
        }));

    let api_routes = public_routes
        .merge(admin_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
