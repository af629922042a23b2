//! Root controller: owns the session and decides which screen is shown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both front ends hold exactly one `RootController`. It hydrates once at
//! construction, adopts every session the store hands back, and is the only
//! place that calls the store's write paths.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::dashboard::DashboardView;
use crate::error::{GraphqlError, StorageError};
use crate::form::{LoginForm, SignupForm};
use crate::graphql::{self, Transport};
use crate::storage::Storage;
use crate::store::SessionStore;
use crate::types::{AuthPayload, Session};

/// Which form is shown while signed out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Signup,
}

/// What the front end should render right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard(DashboardView),
    Login,
    Signup,
}

/// Owner of the in-memory session and its durable mirror.
#[derive(Debug)]
pub struct RootController<S> {
    store: SessionStore<S>,
    session: Session,
    view: AuthView,
}

impl<S: Storage> RootController<S> {
    /// Hydrate from `storage` and start on the login form when signed out.
    pub fn new(storage: S) -> Self {
        let mut store = SessionStore::new(storage);
        let session = store.hydrate();
        Self { store, session, view: AuthView::Login }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    #[cfg(test)]
    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn show_login(&mut self) {
        self.view = AuthView::Login;
    }

    pub fn show_signup(&mut self) {
        self.view = AuthView::Signup;
    }

    /// Adopt a session from a successful login.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the session could not be persisted; the
    /// store has purged its record, so the session falls back to empty.
    pub fn on_login(&mut self, payload: AuthPayload) -> Result<(), StorageError> {
        self.session = match self.store.login(payload) {
            Ok(session) => session,
            Err(e) => {
                self.session = Session::empty();
                return Err(e);
            }
        };
        tracing::info!(user_id = self.session.user().map(|u| u.id.as_str()), "signed in");
        Ok(())
    }

    /// Adopt a session from a successful registration.
    ///
    /// # Errors
    ///
    /// Same as [`RootController::on_login`].
    pub fn on_signup(&mut self, payload: AuthPayload) -> Result<(), StorageError> {
        self.on_login(payload)
    }

    /// Sign out. The in-memory session is cleared even if the purge fails.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the durable record could not be removed.
    pub fn on_logout(&mut self) -> Result<(), StorageError> {
        let purged = self.store.logout();
        self.session = Session::empty();
        self.view = AuthView::Login;
        tracing::info!("signed out");
        purged.map(|_| ())
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        if self.session.is_authenticated() {
            return Screen::Dashboard(DashboardView::from_session(&self.session));
        }
        match self.view {
            AuthView::Login => Screen::Login,
            AuthView::Signup => Screen::Signup,
        }
    }

    /// Drive `form` through one login round trip.
    ///
    /// Returns `true` when the session is now authenticated. On any failure
    /// the form is back to idle with the message to show.
    pub async fn submit_login<T: Transport>(&mut self, form: &mut LoginForm, transport: &T) -> bool {
        let Some(request) = form.begin_submit() else {
            return false;
        };
        let result = graphql::login(transport, &request.identifier, &request.password).await;
        self.complete_login(form, result)
    }

    /// Drive `form` through one registration round trip.
    ///
    /// The register payload is adopted directly; there is no second login.
    pub async fn submit_signup<T: Transport>(&mut self, form: &mut SignupForm, transport: &T) -> bool {
        let Some(request) = form.begin_submit() else {
            return false;
        };
        let result = graphql::register(transport, &request.email, &request.password, &request.username).await;
        self.complete_signup(form, result)
    }

    /// Apply the outcome of a login request started with
    /// [`LoginForm::begin_submit`].
    pub fn complete_login(&mut self, form: &mut LoginForm, result: Result<AuthPayload, GraphqlError>) -> bool {
        if !form.finish(&result) {
            return false;
        }
        let Ok(payload) = result else {
            return false;
        };
        match self.on_login(payload) {
            Ok(()) => true,
            Err(e) => {
                form.fail(e.to_string());
                false
            }
        }
    }

    /// Apply the outcome of a register request started with
    /// [`SignupForm::begin_submit`].
    pub fn complete_signup(&mut self, form: &mut SignupForm, result: Result<AuthPayload, GraphqlError>) -> bool {
        if !form.finish(&result) {
            return false;
        }
        let Ok(payload) = result else {
            return false;
        };
        match self.on_signup(payload) {
            Ok(()) => true,
            Err(e) => {
                form.fail(e.to_string());
                false
            }
        }
    }
}
