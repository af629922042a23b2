//! User, role, and session data model.
//!
//! DESIGN
//! ======
//! `User` and `Role` mirror the GraphQL selection sets field-for-field so the
//! same serde shape serves the wire and the persisted `user` entry. `Session`
//! hides its storage so "authenticated" can only mean "user and token are both
//! present".

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Classification attached to a user by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Backend role identifier.
    pub id: String,
    /// Display name (e.g. `"Authenticated"`).
    pub name: String,
    /// Free-form description; the backend may send `null`.
    #[serde(default)]
    pub description: Option<String>,
    /// Role type key (e.g. `"authenticated"`).
    #[serde(rename = "type")]
    pub kind: String,
}

/// The authenticated identity returned by `login` and `register`.
///
/// Never mutated client-side; a new login replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Whether the email address has been confirmed; `null` reads as `false`.
    #[serde(default, deserialize_with = "null_as_false")]
    pub confirmed: bool,
    /// Whether the account is blocked; `null` reads as `false`.
    #[serde(default, deserialize_with = "null_as_false")]
    pub blocked: bool,
    /// Assigned role, if any.
    #[serde(default)]
    pub role: Option<Role>,
    /// Document identifier, only selected by the register mutation.
    #[serde(rename = "documentId", default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

/// The backend types these flags as nullable.
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A successful login/register result: who signed in and their bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    /// Bearer token (`jwt` on the wire).
    #[serde(rename = "jwt")]
    pub token: String,
    /// The signed-in user.
    pub user: User,
}

/// Client-local record of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<AuthPayload>,
}

impl Session {
    /// The signed-out session.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A signed-in session for `user` holding `token`.
    #[must_use]
    pub fn authenticated(user: User, token: String) -> Self {
        Self { current: Some(AuthPayload { token, user }) }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.current.as_ref().map(|c| &c.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|c| c.token.as_str())
    }
}

impl From<AuthPayload> for Session {
    fn from(payload: AuthPayload) -> Self {
        Self { current: Some(payload) }
    }
}

/// One row of the `users` query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    /// Role exactly as the backend returns it (scalar or object).
    #[serde(default)]
    pub role: Option<serde_json::Value>,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}
