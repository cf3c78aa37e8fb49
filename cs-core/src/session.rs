//! Per-connection session store.
//!
//! Authentication status is derived from the active user, so a session can
//! never claim to be authenticated without a user, and the active user is
//! always a key of the credentials table.

use crate::error::{AuthError, RegistrationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_USERNAME: &str = "subhadip";
pub const DEFAULT_EMAIL: &str = "subhadip@gmail.com";
pub const DEFAULT_PASSWORD: &str = "subhadip123";

/// Stored registration details. Passwords are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

/// The built-in account every new session starts with.
pub fn default_credentials() -> BTreeMap<String, Credential> {
    BTreeMap::from([(
        DEFAULT_USERNAME.to_string(),
        Credential {
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        },
    )])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    seed: BTreeMap<String, Credential>,
    credentials: BTreeMap<String, Credential>,
    active_user: Option<String>,
    rotation_counter: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_credentials(default_credentials())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session seeded with `seed`; logout restores this table.
    pub fn with_credentials(seed: BTreeMap<String, Credential>) -> Self {
        Self {
            credentials: seed.clone(),
            seed,
            active_user: None,
            rotation_counter: 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.active_user.is_some()
    }

    pub fn active_user(&self) -> Option<&str> {
        self.active_user.as_deref()
    }

    pub fn credentials(&self) -> &BTreeMap<String, Credential> {
        &self.credentials
    }

    pub fn credential(&self, username: &str) -> Option<&Credential> {
        self.credentials.get(username)
    }

    pub fn rotation_counter(&self) -> u64 {
        self.rotation_counter
    }

    /// Mark `username` as signed in. It must already be registered.
    pub fn set_active_user(&mut self, username: &str) -> Result<(), AuthError> {
        if !self.credentials.contains_key(username) {
            return Err(AuthError::InvalidCredentials);
        }
        self.active_user = Some(username.to_string());
        Ok(())
    }

    /// Add a new account; existing usernames are never overwritten.
    pub fn insert_credential(&mut self, username: &str, credential: Credential) -> Result<(), RegistrationError> {
        if self.credentials.contains_key(username) {
            return Err(RegistrationError::DuplicateUsername);
        }
        self.credentials.insert(username.to_string(), credential);
        Ok(())
    }

    pub fn increment_rotation(&mut self) -> u64 {
        self.rotation_counter = self.rotation_counter.saturating_add(1);
        self.rotation_counter
    }

    pub fn reset_rotation(&mut self) {
        self.rotation_counter = 0;
    }

    /// Return every field to its default, as on a brand-new connection.
    pub fn reset(&mut self) {
        self.credentials = self.seed.clone();
        self.active_user = None;
        self.rotation_counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_defaults() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.active_user(), None);
        assert_eq!(session.rotation_counter(), 0);
        assert_eq!(session.credentials().len(), 1);
        assert_eq!(
            session.credential(DEFAULT_USERNAME).map(|c| c.email.as_str()),
            Some(DEFAULT_EMAIL)
        );
    }

    #[test]
    fn active_user_must_be_registered() {
        let mut session = Session::new();
        assert_eq!(session.set_active_user("ghost"), Err(AuthError::InvalidCredentials));
        assert!(!session.is_authenticated());

        session.set_active_user(DEFAULT_USERNAME).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.active_user(), Some(DEFAULT_USERNAME));
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut session = Session::new();
        let cred = Credential {
            email: "other@example.com".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(
            session.insert_credential(DEFAULT_USERNAME, cred),
            Err(RegistrationError::DuplicateUsername)
        );
        assert_eq!(session.credential(DEFAULT_USERNAME).unwrap().password, DEFAULT_PASSWORD);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = Session::new();
        session
            .insert_credential(
                "asha",
                Credential {
                    email: "asha@example.com".to_string(),
                    password: "pw".to_string(),
                },
            )
            .unwrap();
        session.set_active_user("asha").unwrap();
        session.increment_rotation();
        session.increment_rotation();

        session.reset();
        assert_eq!(session, Session::new());
    }
}
