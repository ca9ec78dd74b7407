//! Authentication and authorization module.
//!
//! Credentials are checked against Argon2 password hashes; successful logins
//! get a signed, time-limited HS256 token. `require_admin` is the gate layered
//! over every mutating route group.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::AdminUser;

/// Role carried in the token. The claim itself is a free string so that
/// tokens minted with roles this build does not know about fail closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Claims embedded in an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin user id
    pub sub: String,
    pub name: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity attached to the request after the gate admits it.
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    pub user_id: String,
    pub role: Role,
}

/// Hash a password into an Argon2 PHC string for storage.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against a stored PHC string. Argon2 verification is
/// constant-time; plaintext never touches the store.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Issue a signed access token for an admin user.
pub fn issue_token(secret: &str, user: &AdminUser, ttl: Duration) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token signing failed: {}", e)))
}

/// Verify a token's signature and expiry and return its claims.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized("Not authorized, token failed".to_string()))
}

/// Admin gate middleware. Layered over every mutating route group; attaches
/// the verified identity to request extensions for downstream handlers.
pub async fn require_admin(secret: String, mut request: Request, next: Next) -> Response {
    match authorize(&secret, request.headers()) {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

/// Check the Authorization header and return the caller's identity.
fn authorize(secret: &str, headers: &HeaderMap) -> Result<AuthIdentity, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Not authorized, no token".to_string()))?;

    let claims = verify_token(secret, token)?;

    match Role::from_str(&claims.role) {
        Some(Role::Admin) => Ok(AuthIdentity {
            user_id: claims.sub,
            role: Role::Admin,
        }),
        None => Err(AppError::Forbidden(
            "Not authorized as an admin".to_string(),
        )),
    }
}
