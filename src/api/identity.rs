use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{ApiError, AppState};

/// The authenticated user id for a request, resolved from the `X-User-Id`
/// header against the user store. A missing header, a non-numeric value, or
/// an unknown user is rejected outright; there is no silent default user.
#[derive(Debug, Clone, Copy)]
pub struct Identity(pub i64);

pub const USER_ID_HEADER: &str = "x-user-id";

impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Missing X-User-Id header"))?;

        let id: i64 = raw
            .trim()
            .parse()
            .map_err(|_| ApiError::unauthorized(format!("Invalid user id: {raw}")))?;

        let user = state
            .store
            .users
            .get(id)
            .await
            .ok_or_else(|| ApiError::unauthorized(format!("Unknown user {id}")))?;

        Ok(Self(user.id))
    }
}
