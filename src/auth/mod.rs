// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! # Authentication Module
//!
//! Token lifecycle primitives for the Gatehouse API.
//!
//! ## Token Flow
//!
//! 1. Client registers or logs in and receives an HS256-signed JWT
//! 2. Client sends `Authorization: Bearer <token>` on protected requests
//! 3. Server:
//!    - verifies signature and expiry ([`TokenCodec`])
//!    - rejects tokens revoked by logout/refresh ([`RevocationList`])
//!    - resolves `sub` to the stored user
//!
//! ## Security
//!
//! - Tokens carry a random `jti` nonce so individual tokens can be revoked
//! - Expiry is enforced at decode time with zero clock leeway
//! - Revocation entries are purged lazily once the shadowed token expires

pub mod claims;
pub mod codec;
pub mod error;
pub mod extractor;
pub mod revocation;

pub use claims::Claims;
pub use codec::TokenCodec;
pub use error::AuthError;
pub use extractor::Bearer;
pub use revocation::RevocationList;
