//! Read-only projection of the signed-in user for display.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::types::{Session, User};

/// Shown in place of any missing value.
pub const PLACEHOLDER: &str = "-";

/// A two-state status label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    /// `true` renders in the "good" style.
    pub positive: bool,
}

impl Badge {
    #[must_use]
    pub fn confirmation(confirmed: bool) -> Self {
        Self { label: if confirmed { "Confirmed" } else { "Unconfirmed" }, positive: confirmed }
    }

    #[must_use]
    pub fn account(blocked: bool) -> Self {
        Self { label: if blocked { "Blocked" } else { "Active" }, positive: !blocked }
    }
}

/// Everything the dashboard screen shows, already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub username: String,
    pub email: String,
    pub user_id: String,
    pub confirmed: Badge,
    pub status: Badge,
    pub role_id: String,
    pub role_name: String,
    pub role_description: String,
    pub role_type: String,
}

impl DashboardView {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        session.user().map_or_else(Self::placeholder, Self::from_user)
    }

    #[must_use]
    pub fn from_user(user: &User) -> Self {
        let role = user.role.as_ref();
        Self {
            username: or_placeholder(&user.username),
            email: or_placeholder(&user.email),
            user_id: or_placeholder(&user.id),
            confirmed: Badge::confirmation(user.confirmed),
            status: Badge::account(user.blocked),
            role_id: or_placeholder(role.map_or("", |r| r.id.as_str())),
            role_name: or_placeholder(role.map_or("", |r| r.name.as_str())),
            role_description: or_placeholder(role.and_then(|r| r.description.as_deref()).unwrap_or("")),
            role_type: or_placeholder(role.map_or("", |r| r.kind.as_str())),
        }
    }

    fn placeholder() -> Self {
        Self {
            username: PLACEHOLDER.to_owned(),
            email: PLACEHOLDER.to_owned(),
            user_id: PLACEHOLDER.to_owned(),
            confirmed: Badge::confirmation(false),
            status: Badge::account(false),
            role_id: PLACEHOLDER.to_owned(),
            role_name: PLACEHOLDER.to_owned(),
            role_description: PLACEHOLDER.to_owned(),
            role_type: PLACEHOLDER.to_owned(),
        }
    }
}

fn or_placeholder(value: &str) -> String {
    if value.is_empty() { PLACEHOLDER.to_owned() } else { value.to_owned() }
}
