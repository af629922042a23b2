//! Error taxonomy for the session core.
//!
//! ERROR HANDLING
//! ==============
//! Network failures and GraphQL-level failures are distinct variants so views
//! can branch without inspecting strings. Every error here resolves back to a
//! stable state: forms return to idle, hydration falls back to an empty session.

/// Failure of one GraphQL request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphqlError {
    /// The request never produced a response (connection refused, DNS, timeout).
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-empty `errors` list; carries the first message.
    #[error("{0}")]
    Remote(String),

    /// The response body was not JSON, or `data` did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Local form checks that run before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please enter your identifier and password.")]
    MissingCredentials,
}

/// A durable write or purge did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("storage {op} failed for key `{key}`: {message}")]
pub struct StorageError {
    pub op: &'static str,
    pub key: String,
    pub message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(op: &'static str, key: &str, message: impl Into<String>) -> Self {
        Self { op, key: key.to_owned(), message: message.into() }
    }
}

/// Why a persisted session record was rejected during hydration.
///
/// Only logged; the caller always receives an empty session instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistedStateError {
    #[error("persisted user entry is missing")]
    MissingUser,
    #[error("persisted token entry is missing")]
    MissingToken,
    #[error("persisted user entry is malformed: {0}")]
    MalformedUser(String),
}
