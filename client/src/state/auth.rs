//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<Controller>` via context. Pages read it to
//! decide what to render and write it to adopt or drop a session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{RootController, Screen};

use crate::util::storage::BrowserStorage;

/// The single root controller, backed by `localStorage`.
pub type Controller = RootController<BrowserStorage>;

/// Top-level page selection; the dashboard projection is read separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Login,
    Signup,
}

impl Page {
    pub fn of(screen: &Screen) -> Self {
        match screen {
            Screen::Dashboard(_) => Self::Dashboard,
            Screen::Login => Self::Login,
            Screen::Signup => Self::Signup,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Login => "Sign In",
            Self::Signup => "Sign Up",
        }
    }
}
