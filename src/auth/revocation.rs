// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Token revocation registry.
//!
//! Tracks the `jti` nonces of tokens that were invalidated before their
//! natural expiry (logout, refresh). An entry only needs to live until the
//! token it shadows expires; after that the codec's expiry check rejects the
//! token anyway, so purging is purely a memory optimization.
//!
//! Like [`crate::store::UserStore`], this type is unsynchronized and is
//! wrapped in `Arc<RwLock<_>>` by the service.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct RevocationList {
    entries: HashMap<Uuid, i64>,
}

impl RevocationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `jti` as revoked until `expires_at`. Idempotent.
    ///
    /// Piggybacks a purge of entries whose tokens have already expired.
    pub fn revoke(&mut self, jti: Uuid, expires_at: i64) {
        self.purge_expired(Utc::now().timestamp());
        self.entries.insert(jti, expires_at);
    }

    pub fn is_revoked(&self, jti: &Uuid) -> bool {
        self.entries.contains_key(jti)
    }

    /// Drop entries whose shadowed tokens expired at or before `now`.
    pub fn purge_expired(&mut self, now: i64) {
        self.entries.retain(|_, expires_at| *expires_at > now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoke_marks_and_is_idempotent() {
        let mut list = RevocationList::new();
        let jti = Uuid::new_v4();
        let exp = Utc::now().timestamp() + 3600;

        assert!(!list.is_revoked(&jti));

        list.revoke(jti, exp);
        assert!(list.is_revoked(&jti));
        assert_eq!(list.len(), 1);

        list.revoke(jti, exp);
        assert!(list.is_revoked(&jti));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn purge_drops_only_expired_entries() {
        let mut list = RevocationList::new();
        let now = Utc::now().timestamp();

        let stale = Uuid::new_v4();
        let live = Uuid::new_v4();
        list.revoke(stale, now - 10);
        list.revoke(live, now + 3600);

        list.purge_expired(now);
        assert!(!list.is_revoked(&stale));
        assert!(list.is_revoked(&live));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn revoke_purges_lazily() {
        let mut list = RevocationList::new();
        let now = Utc::now().timestamp();

        list.revoke(Uuid::new_v4(), now - 10);
        // The next revoke sweeps the stale entry out.
        let live = Uuid::new_v4();
        list.revoke(live, now + 3600);

        assert_eq!(list.len(), 1);
        assert!(list.is_revoked(&live));
    }
}
