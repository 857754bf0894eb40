//! Login-form validation rules.
//!
//! Simulates the practice login form: a pure mapping from (username,
//! password) to an [`Outcome`], with no I/O and no failure modes. The rule
//! list and its order are fixed; first match wins.

use crate::credentials::CredentialStore;
use crate::types::Outcome;
use tracing::debug;

/// Message returned on a successful login.
pub const MSG_LOGGED_IN: &str = "Logged In Successfully";
/// Message returned when the username is rejected.
pub const MSG_INVALID_USERNAME: &str = "Your username is invalid!";
/// Message returned when the password is rejected.
pub const MSG_INVALID_PASSWORD: &str = "Your password is invalid!";

/// Substrings rejected outright, checked case-insensitively in this order.
///
/// This is a teaching heuristic, not a sanitizer; the list is frozen.
pub const DANGEROUS_PATTERNS: [&str; 6] = ["<script>", "OR '1'='1", "';", "DROP TABLE", "<", ">"];

/// Maximum accepted field length, in characters.
pub const MAX_FIELD_LEN: usize = 100;

/// The login-form validator, generic over its credential source.
#[derive(Debug, Clone)]
pub struct LoginValidator<S> {
    store: S,
}

impl<S: CredentialStore> LoginValidator<S> {
    /// Creates a validator backed by the given credential store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates one login attempt.
    ///
    /// Total over string inputs; rules are applied in order and the first
    /// matching rule decides the outcome:
    ///
    /// 1. empty username, then empty password
    /// 2. dangerous substrings (username checked before password, per pattern)
    /// 3. over-length username, then over-length password
    /// 4. leading/trailing whitespace in the username
    /// 5. credential lookup (case-sensitive)
    pub fn validate(&self, username: &str, password: &str) -> Outcome {
        let outcome = self.apply_rules(username, password);
        debug!(
            username,
            status = %outcome.status,
            message = %outcome.message,
            "validated login attempt"
        );
        outcome
    }

    fn apply_rules(&self, username: &str, password: &str) -> Outcome {
        if username.is_empty() {
            return Outcome::failure(MSG_INVALID_USERNAME);
        }
        if password.is_empty() {
            return Outcome::failure(MSG_INVALID_PASSWORD);
        }

        let username_lower = username.to_lowercase();
        let password_lower = password.to_lowercase();
        for pattern in DANGEROUS_PATTERNS {
            let pattern = pattern.to_lowercase();
            if username_lower.contains(&pattern) {
                return Outcome::failure(MSG_INVALID_USERNAME);
            }
            if password_lower.contains(&pattern) {
                return Outcome::failure(MSG_INVALID_PASSWORD);
            }
        }

        if username.chars().count() > MAX_FIELD_LEN {
            return Outcome::failure(MSG_INVALID_USERNAME);
        }
        if password.chars().count() > MAX_FIELD_LEN {
            return Outcome::failure(MSG_INVALID_PASSWORD);
        }

        if username != username.trim() {
            return Outcome::failure(MSG_INVALID_USERNAME);
        }

        match self.store.lookup(username) {
            Some(stored) if stored == password => Outcome::success(MSG_LOGGED_IN),
            Some(_) => Outcome::failure(MSG_INVALID_PASSWORD),
            None => Outcome::failure(MSG_INVALID_USERNAME),
        }
    }
}
