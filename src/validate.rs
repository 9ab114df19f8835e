// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Gatehouse

//! Input validation for registration and login.
//!
//! Validation rules are explicit functions producing a field → reasons map
//! ([`ValidationErrors`]) rather than declarative rule strings. All failing
//! fields are reported together so clients can surface every problem at
//! once.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{LoginRequest, RegisterRequest};

/// Maximum accepted length for display names.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum accepted length for email addresses.
pub const MAX_EMAIL_LEN: usize = 255;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field-level validation failures, keyed by input field name.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, reason: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Normalize an email for storage and lookup: trim and ASCII-lowercase.
///
/// Uniqueness is enforced on the normalized form, so `Alice@X.com` and
/// `alice@x.com` address the same account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Structural email check: exactly one `@`, a non-empty local part, a domain
/// containing a dot, and no whitespace.
pub fn is_well_formed_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Validate registration input: name, email, password, confirmation.
pub fn validate_register(request: &RegisterRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = request.name.trim();
    if name.is_empty() {
        errors.add("name", "name is required");
    } else if name.len() > MAX_NAME_LEN {
        errors.add("name", format!("name must be at most {MAX_NAME_LEN} characters"));
    }

    validate_email_field(&request.email, &mut errors);
    validate_password_field(&request.password, &mut errors);

    if request.password != request.password_confirmation {
        errors.add("password", "password confirmation does not match");
    }

    errors.into_result()
}

/// Validate login input: email and password presence and shape.
pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    validate_email_field(&request.email, &mut errors);
    validate_password_field(&request.password, &mut errors);

    errors.into_result()
}

fn validate_email_field(email: &str, errors: &mut ValidationErrors) {
    let email = normalize_email(email);
    if email.is_empty() {
        errors.add("email", "email is required");
    } else if email.len() > MAX_EMAIL_LEN {
        errors.add("email", format!("email must be at most {MAX_EMAIL_LEN} characters"));
    } else if !is_well_formed_email(&email) {
        errors.add("email", "email is not a valid address");
    }
}

fn validate_password_field(password: &str, errors: &mut ValidationErrors) {
    if password.is_empty() {
        errors.add("password", "password is required");
    } else if password.len() < MIN_PASSWORD_LEN {
        errors.add(
            "password",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterRequest {
        RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(validate_register(&valid_register()).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut request = valid_register();
        request.name = "   ".to_string();
        let errors = validate_register(&request).unwrap_err();
        assert!(errors.contains("name"));
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut request = valid_register();
        request.name = "a".repeat(MAX_NAME_LEN + 1);
        let errors = validate_register(&request).unwrap_err();
        assert!(errors.contains("name"));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in [
            "",
            "no-at-sign",
            "@example.com",
            "alice@",
            "alice@nodot",
            "alice@.com",
            "alice@example.com.",
            "alice smith@example.com",
            "alice@ex@ample.com",
        ] {
            let mut request = valid_register();
            request.email = bad.to_string();
            let errors = validate_register(&request).unwrap_err();
            assert!(errors.contains("email"), "expected rejection for {bad:?}");
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let mut request = valid_register();
        request.password = "five5".to_string();
        request.password_confirmation = "five5".to_string();
        let errors = validate_register(&request).unwrap_err();
        assert!(errors.contains("password"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut request = valid_register();
        request.password_confirmation = "different".to_string();
        let errors = validate_register(&request).unwrap_err();
        assert!(errors.contains("password"));
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let request = RegisterRequest {
            name: String::new(),
            email: "bad".to_string(),
            password: "x".to_string(),
            password_confirmation: "y".to_string(),
        };
        let errors = validate_register(&request).unwrap_err();
        assert!(errors.contains("name"));
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn login_requires_email_and_password() {
        let errors = validate_login(&LoginRequest {
            email: String::new(),
            password: String::new(),
        })
        .unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("password"));

        assert!(validate_login(&LoginRequest {
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
        })
        .is_ok());
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Alice@X.COM "), "alice@x.com");
    }

    #[test]
    fn validation_errors_serialize_as_field_map() {
        let mut errors = ValidationErrors::default();
        errors.add("email", "email is required");
        errors.add("email", "second reason");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["email"][0], "email is required");
        assert_eq!(json["email"][1], "second reason");
    }
}
