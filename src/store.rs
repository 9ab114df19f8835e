// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! In-memory credential store.
//!
//! Holds registered [`User`] records keyed by id, with an email index for
//! login lookups. The store itself is not synchronized; callers wrap it in
//! `Arc<RwLock<_>>` (see [`crate::service::AuthService`]), and the
//! check-and-insert in [`UserStore::create`] is race-free because it runs
//! under a single `&mut` borrow.
//!
//! Emails are expected in normalized form (trimmed, lowercased); the service
//! layer normalizes before calling in, so index lookups are exact matches.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::AuthError;
use crate::models::User;

#[derive(Default)]
pub struct UserStore {
    users: HashMap<Uuid, User>,
    email_index: HashMap<String, Uuid>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user, failing if the email is already taken.
    pub fn create(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<User, AuthError> {
        let email = email.into();

        if self.email_index.contains_key(&email) {
            return Err(AuthError::DuplicateEmail);
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.clone(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        };

        self.email_index.insert(email, user.id);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.email_index
            .get(email)
            .and_then(|id| self.users.get(id))
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_assigns_id_and_indexes_email() {
        let mut store = UserStore::new();
        let user = store
            .create("Alice", "alice@example.com", "hash")
            .expect("create user");

        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(user.id), Some(&user));
        assert_eq!(store.find_by_email("alice@example.com"), Some(&user));
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let mut store = UserStore::new();
        store
            .create("Alice", "alice@example.com", "hash-a")
            .expect("first create");

        let err = store
            .create("Other Alice", "alice@example.com", "hash-b")
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));

        // The failed attempt must not have touched the store.
        assert_eq!(store.len(), 1);
        let stored = store.find_by_email("alice@example.com").unwrap();
        assert_eq!(stored.name, "Alice");
        assert_eq!(stored.password_hash, "hash-a");
    }

    #[test]
    fn lookups_miss_for_unknown_keys() {
        let store = UserStore::new();
        assert!(store.find_by_email("nobody@example.com").is_none());
        assert!(store.find_by_id(Uuid::new_v4()).is_none());
        assert!(store.is_empty());
    }
}
