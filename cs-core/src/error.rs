//! Error types for authentication, registration and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Login failure. Unknown users and wrong passwords are indistinguishable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Registration failures, in the order they are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("All fields required")]
    MissingField,

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `DashboardConfig`
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rotation needs a fixed set of images
    #[error("Expected {expected} rotation images, found {found}")]
    ImageCount { expected: usize, found: usize },

    #[error("At least one seed user is required")]
    NoSeedUsers,
}
