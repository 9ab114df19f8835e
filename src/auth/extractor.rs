// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Axum extractor for the bearer token.
//!
//! [`Bearer`] pulls the raw token out of the `Authorization` header; token
//! verification itself happens in the service layer, which also consults the
//! revocation registry and the credential store. The server never reads the
//! token from anywhere but this header.
//!
//! ```rust,ignore
//! async fn me(State(state): State<AppState>, Bearer(token): Bearer) -> ... {
//!     let user = state.auth.current_user(&token).await?;
//! }
//! ```

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::error::AuthError;

/// Raw bearer token from the `Authorization: Bearer <token>` header.
pub struct Bearer(pub String);

impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidAuthHeader)?
            .trim();

        if token.is_empty() {
            return Err(AuthError::InvalidAuthHeader);
        }

        Ok(Bearer(token.to_string()))
    }
}
