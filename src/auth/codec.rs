// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Session token codec.
//!
//! Mints and decodes HS256-signed JWTs. The signing secret and TTL come
//! from [`Settings`] at construction; there is no ambient key state.
//!
//! Expiry is enforced by [`TokenCodec::decode`] against the current clock,
//! so tokens go stale on their own without any registry lookup. Mint and
//! decode run on the same host clock, so validation uses zero leeway.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::claims::Claims;
use super::error::AuthError;
use crate::config::Settings;

pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl TokenCodec {
    pub fn new(settings: &Settings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
            ttl_seconds: settings.ttl_seconds(),
        }
    }

    /// Token lifetime in seconds, as reported to clients in `expires_in`.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Mint a signed token for `subject`, expiring after the configured TTL.
    pub fn mint(&self, subject: Uuid) -> Result<(String, Claims), AuthError> {
        let claims = Claims::new(subject, Utc::now().timestamp(), self.ttl_seconds as i64);
        let token = self.sign(&claims)?;
        Ok((token, claims))
    }

    /// Decode and verify a token: signature, structure, and expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::MalformedToken,
            })
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenMint(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    fn codec() -> TokenCodec {
        TokenCodec::new(&Settings::new("test-secret", 60))
    }

    #[test]
    fn mint_then_decode_round_trips_claims() {
        let codec = codec();
        let subject = Uuid::new_v4();

        let (token, minted) = codec.mint(subject).expect("mint");
        let decoded = codec.decode(&token).expect("decode");

        assert_eq!(decoded, minted);
        assert_eq!(decoded.sub, subject);
        assert_eq!(decoded.exp - decoded.iat, 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let codec = codec();
        let stale = Claims {
            sub: Uuid::new_v4(),
            iat: Utc::now().timestamp() - 7200,
            exp: Utc::now().timestamp() - 3600,
            jti: Uuid::new_v4(),
        };
        let token = codec.sign(&stale).expect("sign");

        let err = codec.decode(&token).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn tampered_payload_invalidates_signature() {
        let codec = codec();
        let (token, claims) = codec.mint(Uuid::new_v4()).expect("mint");

        // Swap the subject in the payload without re-signing.
        let mut forged = claims.clone();
        forged.sub = Uuid::new_v4();
        let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());

        let parts: Vec<&str> = token.split('.').collect();
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

        let err = codec.decode(&tampered).unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let codec = codec();
        let other = TokenCodec::new(&Settings::new("other-secret", 60));

        let (token, _) = other.mint(Uuid::new_v4()).expect("mint");
        let err = codec.decode(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn garbage_is_malformed() {
        let codec = codec();
        for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d"] {
            let err = codec.decode(garbage).unwrap_err();
            assert!(matches!(err, AuthError::MalformedToken), "for {garbage:?}");
        }
    }
}
