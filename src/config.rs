// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment at startup into a
//! [`Settings`] struct. Nothing in this crate reads ambient globals; the
//! token codec and service receive their configuration explicitly.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTH_TOKEN_SECRET` | HS256 signing secret for session tokens | Dev-only fallback |
//! | `AUTH_TOKEN_TTL_MINUTES` | Session token lifetime in minutes | `60` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the token signing secret.
pub const TOKEN_SECRET_ENV: &str = "AUTH_TOKEN_SECRET";

/// Environment variable name for the token TTL in minutes.
pub const TOKEN_TTL_ENV: &str = "AUTH_TOKEN_TTL_MINUTES";

/// Default token lifetime in minutes.
pub const DEFAULT_TTL_MINUTES: u64 = 60;

/// Fallback signing secret so the binary runs out of the box.
///
/// Only used when `AUTH_TOKEN_SECRET` is unset; a warning is logged.
const DEV_SECRET: &str = "gatehouse-dev-secret-do-not-deploy";

/// Token signing and lifetime configuration.
///
/// Passed into [`crate::auth::TokenCodec`] at construction instead of being
/// read from ambient global state.
#[derive(Clone)]
pub struct Settings {
    /// HS256 signing secret.
    pub secret: String,
    /// Session token lifetime, in minutes.
    pub ttl_minutes: u64,
}

impl Settings {
    pub fn new(secret: impl Into<String>, ttl_minutes: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_minutes,
        }
    }

    /// Load settings from the environment.
    pub fn from_env() -> Self {
        let secret = match env::var(TOKEN_SECRET_ENV) {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "{TOKEN_SECRET_ENV} not set; using the development signing secret"
                );
                DEV_SECRET.to_string()
            }
        };

        let ttl_minutes = env::var(TOKEN_TTL_ENV)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TTL_MINUTES);

        Self {
            secret,
            ttl_minutes,
        }
    }

    /// Token lifetime in seconds, as reported to clients in `expires_in`.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_minutes * 60
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEV_SECRET, DEFAULT_TTL_MINUTES)
    }
}
