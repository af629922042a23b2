//! Login and signup form state machines.
//!
//! Each form moves `Idle -> Submitting -> Idle`, with a failure message shown
//! while idle until the next edit or submit. [`LoginForm::begin_submit`] and
//! [`SignupForm::begin_submit`] are the only ways into `Submitting` and refuse
//! while a request is in flight, so at most one submission exists per form.
//!
//! Validation that needs no network (empty fields, password confirmation) runs
//! inside `begin_submit`; when it fails no request is produced at all.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::{GraphqlError, ValidationError};
use crate::types::AuthPayload;

/// Observable phase of a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    /// Idle, with the last failure's message on display.
    Failed(String),
}

#[derive(Clone, Debug, Default)]
struct Submission {
    in_flight: bool,
    error: Option<String>,
}

impl Submission {
    fn status(&self) -> FormStatus {
        if self.in_flight {
            FormStatus::Submitting
        } else if let Some(message) = &self.error {
            FormStatus::Failed(message.clone())
        } else {
            FormStatus::Idle
        }
    }

    /// Guard and validate; on success the form is `Submitting`.
    fn begin(&mut self, validation: Result<(), ValidationError>) -> bool {
        if self.in_flight {
            tracing::debug!("submit ignored while a request is in flight");
            return false;
        }
        if let Err(e) = validation {
            self.error = Some(e.to_string());
            return false;
        }
        self.error = None;
        self.in_flight = true;
        true
    }

    fn fail(&mut self, message: String) {
        self.in_flight = false;
        self.error = Some(message);
    }

    fn finish(&mut self, result: &Result<AuthPayload, GraphqlError>) -> bool {
        self.in_flight = false;
        match result {
            Ok(_) => {
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

/// Credentials produced by a successful [`LoginForm::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Email/username + password sign-in form.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    identifier: String,
    password: String,
    submission: Submission,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_identifier(&mut self, value: impl Into<String>) {
        self.identifier = value.into();
        self.submission.error = None;
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.submission.error = None;
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.submission.status()
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.in_flight
    }

    /// Enter `Submitting` and return the request to send.
    ///
    /// Returns `None` while another submission is in flight, or when a field
    /// is empty (the form then shows the validation message).
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        let identifier = self.identifier.trim();
        let validation = if identifier.is_empty() || self.password.is_empty() {
            Err(ValidationError::MissingCredentials)
        } else {
            Ok(())
        };
        if !self.submission.begin(validation) {
            return None;
        }
        Some(LoginRequest { identifier: identifier.to_owned(), password: self.password.clone() })
    }

    /// Leave `Submitting` with the outcome of the request.
    ///
    /// Returns `true` on success; the password is cleared and the caller hands
    /// the payload to the controller.
    pub fn finish(&mut self, result: &Result<AuthPayload, GraphqlError>) -> bool {
        let ok = self.submission.finish(result);
        if ok {
            self.password.clear();
        }
        ok
    }

    /// Show `message` after a failure outside the request itself.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submission.fail(message.into());
    }
}

/// Registration details produced by a successful [`SignupForm::begin_submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub username: String,
}

/// New-account form with password confirmation.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    username: String,
    email: String,
    password: String,
    confirm_password: String,
    submission: Submission,
}

impl SignupForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
        self.submission.error = None;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.submission.error = None;
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.submission.error = None;
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password = value.into();
        self.submission.error = None;
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.submission.status()
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.in_flight
    }

    /// Local checks, in order: every field filled, then passwords equal.
    ///
    /// # Errors
    ///
    /// The first failing check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty()
            || self.username.trim().is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    /// Enter `Submitting` and return the registration to send.
    ///
    /// Returns `None` while another submission is in flight or when
    /// [`SignupForm::validate`] fails.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        let validation = self.validate();
        if !self.submission.begin(validation) {
            return None;
        }
        Some(SignupRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            username: self.username.trim().to_owned(),
        })
    }

    /// Leave `Submitting` with the outcome of the request.
    ///
    /// Returns `true` on success; both password fields are cleared.
    pub fn finish(&mut self, result: &Result<AuthPayload, GraphqlError>) -> bool {
        let ok = self.submission.finish(result);
        if ok {
            self.password.clear();
            self.confirm_password.clear();
        }
        ok
    }

    /// Show `message` after a failure outside the request itself.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submission.fail(message.into());
    }
}
