// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Gatehouse - Bearer-Token Authentication Service
//!
//! This crate registers users, authenticates credentials, and manages the
//! lifecycle of HS256 JWT session tokens: mint, verify, revoke, refresh.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Token codec, revocation registry, bearer extraction
//! - `service` - The session state machine orchestrating the pieces
//! - `store` - In-memory credential store
//! - `password` - Argon2id hashing and verification

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod password;
pub mod service;
pub mod state;
pub mod store;
pub mod validate;
