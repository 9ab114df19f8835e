// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Authentication endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::{AuthError, Bearer},
    models::{LoginRequest, MessageResponse, RegisterRequest, SessionResponse, UserProfile},
    state::AppState,
};

/// Register a new account.
///
/// On success the account is created and a first session token is minted in
/// one step.
#[utoipa::path(
    post,
    path = "/v1/auth/register",
    request_body = RegisterRequest,
    tag = "Auth",
    responses(
        (status = 201, description = "Account created", body = SessionResponse),
        (status = 422, description = "Validation failure or duplicate email"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AuthError> {
    let (user, token) = state.auth.register(request).await?;
    let response =
        SessionResponse::bearer(user.into(), token, state.auth.token_ttl_seconds());
    Ok((StatusCode::CREATED, Json(response)))
}

/// Authenticate with email and password.
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    request_body = LoginRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Authenticated", body = SessionResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 422, description = "Validation failure"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AuthError> {
    let (user, token) = state.auth.login(request).await?;
    let response =
        SessionResponse::bearer(user.into(), token, state.auth.token_ttl_seconds());
    Ok(Json(response))
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/v1/auth/me",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserProfile),
        (status = 401, description = "Missing, invalid, expired, or revoked token"),
    )
)]
pub async fn me(
    State(state): State<AppState>,
    Bearer(token): Bearer,
) -> Result<Json<UserProfile>, AuthError> {
    let user = state.auth.current_user(&token).await?;
    Ok(Json(user.into()))
}

/// Invalidate the presented session token.
#[utoipa::path(
    post,
    path = "/v1/auth/logout",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Token revoked", body = MessageResponse),
        (status = 401, description = "Missing, invalid, or expired token"),
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    Bearer(token): Bearer,
) -> Result<Json<MessageResponse>, AuthError> {
    state.auth.logout(&token).await?;
    Ok(Json(MessageResponse::new("Successfully logged out")))
}

/// Exchange a valid session token for a fresh one.
///
/// The old token is revoked in the same step, so it cannot be replayed.
#[utoipa::path(
    post,
    path = "/v1/auth/refresh",
    tag = "Auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "New session token", body = SessionResponse),
        (status = 401, description = "Missing, invalid, expired, or revoked token"),
    )
)]
pub async fn refresh(
    State(state): State<AppState>,
    Bearer(token): Bearer,
) -> Result<Json<SessionResponse>, AuthError> {
    let (user, new_token) = state.auth.refresh(&token).await?;
    let response =
        SessionResponse::bearer(user.into(), new_token, state.auth.token_ttl_seconds());
    Ok(Json(response))
}
