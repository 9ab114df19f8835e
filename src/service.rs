// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Authentication service.
//!
//! Orchestrates the credential store, password hasher, token codec, and
//! revocation registry into the session state machine:
//!
//! ```text
//! Anonymous --register/login--> Authenticated --logout/refresh/expiry--> Revoked/Expired
//! ```
//!
//! Revoked/Expired is terminal for a token; a session re-enters
//! Authenticated only through a new login or refresh token.
//!
//! Operations either fully succeed (user and token both valid) or fully
//! fail; there are no partial-success states.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::{AuthError, Claims, RevocationList, TokenCodec};
use crate::config::Settings;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::password;
use crate::store::UserStore;
use crate::validate;

pub struct AuthService {
    users: RwLock<UserStore>,
    revoked: RwLock<RevocationList>,
    codec: TokenCodec,
}

impl AuthService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            users: RwLock::new(UserStore::new()),
            revoked: RwLock::new(RevocationList::new()),
            codec: TokenCodec::new(settings),
        }
    }

    /// Token lifetime in seconds, for `expires_in` response fields.
    pub fn token_ttl_seconds(&self) -> u64 {
        self.codec.ttl_seconds()
    }

    /// Register a new account and mint its first session token.
    pub async fn register(&self, request: RegisterRequest) -> Result<(User, String), AuthError> {
        validate::validate_register(&request)?;

        let email = validate::normalize_email(&request.email);
        let password_hash = password::hash(&request.password)?;

        // Uniqueness check and insert are atomic under one write lock.
        let user = {
            let mut users = self.users.write().await;
            users.create(request.name.trim(), email, password_hash)?
        };

        let (token, _) = self.codec.mint(user.id)?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok((user, token))
    }

    /// Authenticate an email/password pair and mint a session token.
    ///
    /// Unknown email and wrong password both come back as
    /// [`AuthError::InvalidCredentials`]; the response carries no hint which
    /// one it was.
    pub async fn login(&self, request: LoginRequest) -> Result<(User, String), AuthError> {
        validate::validate_login(&request)?;

        let email = validate::normalize_email(&request.email);
        let user = {
            let users = self.users.read().await;
            users.find_by_email(&email).cloned()
        };

        let user = match user {
            Some(user) if password::verify(&request.password, &user.password_hash) => user,
            Some(_) => {
                tracing::warn!("login failed: password mismatch");
                return Err(AuthError::InvalidCredentials);
            }
            None => {
                // Burn one hash so an unknown email costs the same as a
                // failed verify, keeping the two failure paths
                // timing-indistinguishable.
                let _ = password::hash(&request.password);
                tracing::warn!("login failed: unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let (token, _) = self.codec.mint(user.id)?;
        tracing::info!(user_id = %user.id, "user logged in");
        Ok((user, token))
    }

    /// Resolve a bearer token to its user.
    ///
    /// Fails if the token is malformed, forged, expired, revoked, or if its
    /// subject no longer exists.
    pub async fn current_user(&self, token: &str) -> Result<User, AuthError> {
        let (user, _) = self.authenticate(token).await?;
        Ok(user)
    }

    /// Invalidate a token by revoking its nonce.
    ///
    /// The token must decode cleanly (valid signature, unexpired), but
    /// revoking an already-revoked token is not an error.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let claims = self.codec.decode(token)?;

        self.revoked.write().await.revoke(claims.jti, claims.exp);
        tracing::info!(user_id = %claims.sub, "user logged out");
        Ok(())
    }

    /// Exchange a valid token for a fresh one, invalidating the old one.
    pub async fn refresh(&self, token: &str) -> Result<(User, String), AuthError> {
        let (user, claims) = self.authenticate(token).await?;

        {
            let mut revoked = self.revoked.write().await;
            // Re-check under the write lock so two concurrent refreshes of
            // the same token cannot both rotate it.
            if revoked.is_revoked(&claims.jti) {
                return Err(AuthError::TokenRevoked);
            }
            revoked.revoke(claims.jti, claims.exp);
        }

        let (new_token, _) = self.codec.mint(user.id)?;
        tracing::info!(user_id = %user.id, "session token refreshed");
        Ok((user, new_token))
    }

    /// Decode a token and run the full validity checks: signature, expiry,
    /// revocation, and subject existence.
    async fn authenticate(&self, token: &str) -> Result<(User, Claims), AuthError> {
        let claims = self.codec.decode(token)?;

        if self.revoked.read().await.is_revoked(&claims.jti) {
            return Err(AuthError::TokenRevoked);
        }

        let user = {
            let users = self.users.read().await;
            users.find_by_id(claims.sub).cloned()
        };

        user.map(|user| (user, claims))
            .ok_or(AuthError::UnknownSubject)
    }

    /// Number of revocation entries currently held, after purging expired
    /// ones. Exposed for the health endpoint.
    pub async fn revoked_token_count(&self) -> usize {
        let mut revoked = self.revoked.write().await;
        revoked.purge_expired(chrono::Utc::now().timestamp());
        revoked.len()
    }
}
