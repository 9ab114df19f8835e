// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! # API Data Models
//!
//! Request and response data structures for the authentication API. All
//! wire-facing types derive `Serialize`/`Deserialize` and `ToSchema` for
//! JSON handling and OpenAPI documentation.
//!
//! The stored [`User`] record carries the password hash and is never
//! serialized directly; responses use the [`UserProfile`] projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// =============================================================================
// User Records
// =============================================================================

/// A registered user account as held by the credential store.
///
/// `email` is stored in normalized form (trimmed, ASCII-lowercased) and is
/// unique across all users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier, assigned at registration.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Normalized email address (unique).
    pub email: String,
    /// Argon2id password hash in PHC string format.
    pub password_hash: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

/// Public projection of a [`User`], safe to serialize in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserProfile {
    /// User's unique ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        user.clone().into()
    }
}

// =============================================================================
// Request Models
// =============================================================================

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Display name (non-empty, at most 255 characters).
    pub name: String,
    /// Email address (well-formed, at most 255 characters, unique).
    pub email: String,
    /// Password (at least 6 characters).
    pub password: String,
    /// Must match `password` exactly.
    pub password_confirmation: String,
}

/// Request to authenticate with email and password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email address the account was registered with.
    pub email: String,
    /// Account password.
    pub password: String,
}

// =============================================================================
// Response Models
// =============================================================================

/// Successful authentication response carrying a fresh session token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    /// The authenticated user.
    pub user: UserProfile,
    /// Signed session token.
    pub token: String,
    /// Token scheme; always `bearer`.
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
}

impl SessionResponse {
    /// Build a bearer-token response.
    pub fn bearer(user: UserProfile, token: String, expires_in: u64) -> Self {
        Self {
            user,
            token,
            token_type: "bearer".to_string(),
            expires_in,
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
