//! Authenticated user context extracted from request headers.
//!
//! In production, identity would come from JWT/session validation in an
//! auth middleware. For now this uses header-based extraction: the
//! `X-User-Id` header carries the caller's UUID and the optional
//! `X-User-Role` header carries their role. An absent role header
//! means a regular member; an unparseable one is rejected outright.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::foundation::{Role, UserId};

use super::error::ErrorResponse;

/// Authenticated user context extracted from request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}

/// Rejection type for AuthenticatedUser extraction.
#[derive(Debug)]
pub struct AuthenticationRequired;

impl IntoResponse for AuthenticationRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new("AUTHENTICATION_REQUIRED", "Authentication is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthenticationRequired;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let user_id = parts
                .headers
                .get("X-User-Id")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<UserId>().ok())
                .ok_or(AuthenticationRequired)?;

            let role = match parts.headers.get("X-User-Role") {
                Some(v) => v
                    .to_str()
                    .ok()
                    .and_then(|s| s.parse::<Role>().ok())
                    .ok_or(AuthenticationRequired)?,
                None => Role::Member,
            };

            Ok(AuthenticatedUser { user_id, role })
        })
    }
}
