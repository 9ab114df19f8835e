// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Session token claims.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a session token.
///
/// Standard JWT registered claims plus `jti`, the random nonce the
/// revocation registry keys on. The signature binds all of them; tampering
/// with the payload invalidates the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: the user id this token authenticates.
    pub sub: Uuid,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expiry, Unix seconds. Checked against the current time at decode.
    pub exp: i64,
    /// Random per-token nonce, used for revocation.
    pub jti: Uuid,
}

impl Claims {
    /// Build claims for a fresh token issued at `issued_at` with the given
    /// lifetime.
    pub fn new(subject: Uuid, issued_at: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: subject,
            iat: issued_at,
            exp: issued_at + ttl_seconds,
            jti: Uuid::new_v4(),
        }
    }

    /// Whether this token's expiry has passed at `now`.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifetime_equals_configured_ttl() {
        let claims = Claims::new(Uuid::new_v4(), 1_700_000_000, 3600);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn nonces_are_fresh_per_token() {
        let subject = Uuid::new_v4();
        let first = Claims::new(subject, 1_700_000_000, 3600);
        let second = Claims::new(subject, 1_700_000_000, 3600);
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn expiry_boundary() {
        let claims = Claims::new(Uuid::new_v4(), 1_700_000_000, 60);
        assert!(!claims.is_expired(1_700_000_059));
        assert!(claims.is_expired(1_700_000_060));
        assert!(claims.is_expired(1_700_000_061));
    }
}
