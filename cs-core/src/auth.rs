//! Login, registration and logout on top of the session store.

use crate::error::{AuthError, RegistrationError};
use crate::session::{Credential, Session};
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`, anchored at the start only.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl Session {
    /// Sign in with a registered username and its password.
    ///
    /// On failure the session is left exactly as it was.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&Self, AuthError> {
        let matches = self
            .credential(username)
            .is_some_and(|cred| cred.password == password);
        if !matches {
            log::warn!("[ClimateScope] auth: Rejected login for {:?}", username);
            return Err(AuthError::InvalidCredentials);
        }
        self.set_active_user(username)?;
        log::info!("[ClimateScope] auth: {} logged in", username);
        Ok(self)
    }

    /// Register a new account. Does not sign the new user in.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), RegistrationError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(RegistrationError::MissingField);
        }
        if self.credential(username).is_some() {
            return Err(RegistrationError::DuplicateUsername);
        }
        if !is_valid_email(email) {
            return Err(RegistrationError::InvalidEmail);
        }
        if password != confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        self.insert_credential(
            username,
            Credential {
                email: email.to_string(),
                password: password.to_string(),
            },
        )?;
        log::info!("[ClimateScope] auth: Registered {}", username);
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.active_user() {
            log::info!("[ClimateScope] auth: {} logged out", user);
        }
        self.reset();
    }
}
