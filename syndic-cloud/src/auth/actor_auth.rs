//! JWT bearer authentication for the portal API
//!
//! The login endpoint issues a token carrying the actor id and role; the
//! middleware here decodes it and injects an [`Actor`] into request
//! extensions. Role gates wrap the per-audience routers.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

use crate::state::AppState;

/// Actor role carried in the token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorRole {
    Admin,
    Syndic,
    Resident,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Syndic => "syndic",
            Self::Resident => "resident",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "syndic" => Some(Self::Syndic),
            "resident" => Some(Self::Resident),
            _ => None,
        }
    }
}

/// JWT claims for portal authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Actor id (admin.id or member.id depending on role)
    pub sub: i64,
    /// Actor role: admin | syndic | resident
    pub role: String,
    /// Actor email
    pub email: String,
    /// Expiration (Unix timestamp seconds)
    pub exp: usize,
    /// Issued at (Unix timestamp seconds)
    pub iat: usize,
}

/// Authenticated actor extracted from the JWT
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: i64,
    pub role: ActorRole,
    pub email: String,
}

const JWT_EXPIRY_HOURS: i64 = 24;

/// Create a JWT token for an authenticated actor
pub fn create_token(
    id: i64,
    role: ActorRole,
    email: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now();
    let claims = Claims {
        sub: id,
        role: role.as_str().to_string(),
        email: email.to_string(),
        exp: (now + chrono::Duration::hours(JWT_EXPIRY_HOURS)).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Middleware that extracts and verifies the actor JWT from the Authorization header
pub async fn actor_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::not_authenticated().into_response())?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::invalid_token("Invalid Authorization format").into_response()
    })?;

    let validation = Validation::default();
    let token_data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        AppError::invalid_token("Invalid or expired token").into_response()
    })?;

    let role = ActorRole::from_str(&token_data.claims.role)
        .ok_or_else(|| AppError::invalid_token("Unknown role claim").into_response())?;

    let actor = Actor {
        id: token_data.claims.sub,
        role,
        email: token_data.claims.email,
    };

    request.extensions_mut().insert(actor);

    Ok(next.run(request).await)
}

/// Gate: admin role required
pub async fn require_admin(request: Request, next: Next) -> Result<Response, Response> {
    match request.extensions().get::<Actor>() {
        Some(actor) if actor.role == ActorRole::Admin => Ok(next.run(request).await),
        Some(_) => Err(AppError::new(ErrorCode::AdminRequired).into_response()),
        None => Err(AppError::not_authenticated().into_response()),
    }
}

/// Gate: syndic role required
pub async fn require_syndic(request: Request, next: Next) -> Result<Response, Response> {
    match request.extensions().get::<Actor>() {
        Some(actor) if actor.role == ActorRole::Syndic => Ok(next.run(request).await),
        Some(_) => Err(AppError::new(ErrorCode::SyndicRequired).into_response()),
        None => Err(AppError::not_authenticated().into_response()),
    }
}

/// Gate: any member (syndic or resident), not platform admins
pub async fn require_member(request: Request, next: Next) -> Result<Response, Response> {
    match request.extensions().get::<Actor>() {
        Some(actor) if matches!(actor.role, ActorRole::Syndic | ActorRole::Resident) => {
            Ok(next.run(request).await)
        }
        Some(_) => Err(AppError::new(ErrorCode::PermissionDenied).into_response()),
        None => Err(AppError::not_authenticated().into_response()),
    }
}
