// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Authentication errors.
//!
//! One taxonomy covers the whole service: client input problems (422),
//! authentication failures (401), and server-side signing failures (500).
//! Every failure is surfaced synchronously; nothing is swallowed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::validate::ValidationErrors;

/// Authentication error type.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No authorization header present
    #[error("Authorization header is required")]
    MissingAuthHeader,
    /// Invalid authorization header format
    #[error("Invalid authorization header format (expected 'Bearer <token>')")]
    InvalidAuthHeader,
    /// Token is malformed
    #[error("Token is malformed")]
    MalformedToken,
    /// Token signature is invalid
    #[error("Token signature is invalid")]
    InvalidSignature,
    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,
    /// Token has been revoked (logout or refresh)
    #[error("Token has been revoked")]
    TokenRevoked,
    /// Token subject no longer resolves to a user
    #[error("Token subject no longer exists")]
    UnknownSubject,
    /// Email/password pair did not authenticate. Deliberately does not say
    /// which of the two was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Registration email is already taken
    #[error("A user with this email is already registered")]
    DuplicateEmail,
    /// Request input failed validation
    #[error("Validation errors: {0}")]
    Validation(ValidationErrors),
    /// Token signing failed
    #[error("Could not create token: {0}")]
    TokenMint(String),
    /// Internal error
    #[error("Internal authentication error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthHeader => "missing_auth_header",
            AuthError::InvalidAuthHeader => "invalid_auth_header",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::TokenExpired => "token_expired",
            AuthError::TokenRevoked => "token_revoked",
            AuthError::UnknownSubject => "unknown_subject",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::DuplicateEmail => "duplicate_email",
            AuthError::Validation(_) => "validation_failed",
            AuthError::TokenMint(_) => "token_mint_error",
            AuthError::Internal(_) => "internal_error",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::InvalidAuthHeader
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::TokenExpired
            | AuthError::TokenRevoked
            | AuthError::UnknownSubject
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::DuplicateEmail | AuthError::Validation(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AuthError::TokenMint(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        AuthError::Validation(errors)
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = self.to_string();
        let error_code = self.error_code().to_string();

        let errors = match self {
            AuthError::Validation(errors) => Some(errors),
            _ => None,
        };

        let body = Json(AuthErrorBody {
            error,
            error_code,
            errors,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::TokenExpired.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenRevoked.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::DuplicateEmail.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AuthError::Validation(ValidationErrors::default()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AuthError::TokenMint("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn invalid_credentials_returns_401_body() {
        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error_code"], "invalid_credentials");
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn validation_error_carries_field_map() {
        let mut errors = ValidationErrors::default();
        errors.add("email", "email is required");

        let response = AuthError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["error_code"], "validation_failed");
        assert_eq!(body["errors"]["email"][0], "email is required");
    }
}
