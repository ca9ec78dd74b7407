//! Configuration module for the club backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Hosted media storage account. Uploads are disabled unless the full
/// account triple is present.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Fixed folder all uploads land in.
    pub folder: String,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Secret for signing access tokens (required in production)
    pub jwt_secret: Option<String>,
    /// Access token lifetime in hours
    pub token_ttl_hours: i64,
    /// Admin account to seed at startup, if both are set
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    /// Media storage account, if configured
    pub media: Option<MediaConfig>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("CLUB_DB_PATH")
            .unwrap_or_else(|_| "./data/club.sqlite".to_string())
            .into();

        let bind_addr = env::var("CLUB_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid CLUB_BIND_ADDR format");

        let log_level = env::var("CLUB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let jwt_secret = env::var("CLUB_JWT_SECRET").ok();

        let token_ttl_hours = env::var("CLUB_TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        let admin_email = env::var("CLUB_ADMIN_EMAIL").ok();
        let admin_password = env::var("CLUB_ADMIN_PASSWORD").ok();

        let media = match (
            env::var("CLOUDINARY_CLOUD_NAME"),
            env::var("CLOUDINARY_API_KEY"),
            env::var("CLOUDINARY_API_SECRET"),
        ) {
            (Ok(cloud_name), Ok(api_key), Ok(api_secret)) => Some(MediaConfig {
                cloud_name,
                api_key,
                api_secret,
                folder: env::var("CLUB_MEDIA_FOLDER")
                    .unwrap_or_else(|_| "college_club_website".to_string()),
            }),
            _ => None,
        };

        Self {
            db_path,
            bind_addr,
            log_level,
            jwt_secret,
            token_ttl_hours,
            admin_email,
            admin_password,
            media,
        }
    }
}
