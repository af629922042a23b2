use super::*;
use crate::form::FormStatus;
use crate::storage::{MemoryStorage, TOKEN_KEY, USER_KEY};
use crate::testing::{MockTransport, alice, error_body, login_body};

fn alice_payload(token: &str) -> AuthPayload {
    AuthPayload { token: token.to_owned(), user: alice() }
}

fn filled_login() -> LoginForm {
    let mut form = LoginForm::new();
    form.set_identifier("a@x.com");
    form.set_password("secret");
    form
}

fn filled_signup() -> SignupForm {
    let mut form = SignupForm::new();
    form.set_username("alice");
    form.set_email("a@x.com");
    form.set_password("secret");
    form.set_confirm_password("secret");
    form
}

// =============================================================
// Startup and view selection
// =============================================================

#[test]
fn fresh_start_shows_login() {
    let controller = RootController::new(MemoryStorage::new());
    assert!(!controller.session().is_authenticated());
    assert_eq!(controller.screen(), Screen::Login);
}

#[test]
fn startup_adopts_persisted_session() {
    let mut storage = MemoryStorage::new();
    storage.set_item(USER_KEY, &serde_json::to_string(&alice()).unwrap()).unwrap();
    storage.set_item(TOKEN_KEY, "t1").unwrap();

    let controller = RootController::new(storage);
    assert_eq!(controller.session().token(), Some("t1"));
    assert!(matches!(controller.screen(), Screen::Dashboard(ref view) if view.username == "alice"));
}

#[test]
fn switching_between_login_and_signup() {
    let mut controller = RootController::new(MemoryStorage::new());
    controller.show_signup();
    assert_eq!(controller.screen(), Screen::Signup);
    controller.show_login();
    assert_eq!(controller.screen(), Screen::Login);
}

#[test]
fn authenticated_session_overrides_view_selector() {
    let mut controller = RootController::new(MemoryStorage::new());
    controller.show_signup();
    controller.on_signup(alice_payload("t1")).unwrap();
    assert!(matches!(controller.screen(), Screen::Dashboard(_)));
}

#[test]
fn logout_clears_session_storage_and_returns_to_login() {
    let mut controller = RootController::new(MemoryStorage::new());
    controller.show_signup();
    controller.on_login(alice_payload("t1")).unwrap();

    controller.on_logout().unwrap();
    assert_eq!(controller.session(), &Session::empty());
    assert_eq!(controller.view(), AuthView::Login);
    assert!(controller.store().storage().is_empty());
}

// =============================================================
// End-to-end submissions
// =============================================================

#[tokio::test]
async fn login_submission_authenticates_and_renders_dashboard() {
    let transport = MockTransport::new().respond(login_body("t1"));
    let mut controller = RootController::new(MemoryStorage::new());
    let mut form = filled_login();

    assert!(controller.submit_login(&mut form, &transport).await);
    assert_eq!(controller.session().token(), Some("t1"));
    assert_eq!(controller.session().user(), Some(&alice()));

    let Screen::Dashboard(view) = controller.screen() else {
        panic!("expected dashboard");
    };
    assert_eq!(view.username, "alice");
    assert_eq!(view.email, "a@x.com");
    assert_eq!(view.user_id, "1");
    assert_eq!(view.confirmed.label, "Confirmed");
    assert_eq!(view.status.label, "Active");
    assert_eq!(view.role_name, "-");
}

#[tokio::test]
async fn login_submission_survives_restart() {
    let transport = MockTransport::new().respond(login_body("t1"));
    let mut controller = RootController::new(MemoryStorage::new());
    controller.submit_login(&mut filled_login(), &transport).await;

    let storage = controller.store().storage().clone();
    let restarted = RootController::new(storage);
    assert_eq!(restarted.session(), controller.session());
}

#[tokio::test]
async fn login_remote_error_leaves_form_idle_with_message() {
    let transport = MockTransport::new().respond(error_body("Invalid credentials"));
    let mut controller = RootController::new(MemoryStorage::new());
    let mut form = filled_login();

    assert!(!controller.submit_login(&mut form, &transport).await);
    assert_eq!(form.status(), FormStatus::Failed("Invalid credentials".to_owned()));
    assert!(!form.is_submitting());
    assert!(!controller.session().is_authenticated());
    assert_eq!(controller.screen(), Screen::Login);
    assert!(controller.store().storage().is_empty());
}

#[tokio::test]
async fn login_transport_error_is_shown_verbatim() {
    let transport = MockTransport::new().fail(GraphqlError::Transport("error sending request".to_owned()));
    let mut controller = RootController::new(MemoryStorage::new());
    let mut form = filled_login();

    controller.submit_login(&mut form, &transport).await;
    assert_eq!(form.error(), Some("error sending request"));
}

#[tokio::test]
async fn login_with_empty_password_never_calls_transport() {
    let transport = MockTransport::new().respond(login_body("t1"));
    let mut controller = RootController::new(MemoryStorage::new());
    let mut form = LoginForm::new();
    form.set_identifier("a@x.com");

    assert!(!controller.submit_login(&mut form, &transport).await);
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn signup_password_mismatch_never_calls_transport() {
    let transport = MockTransport::new();
    let mut controller = RootController::new(MemoryStorage::new());
    let mut form = filled_signup();
    form.set_confirm_password("other");

    assert!(!controller.submit_signup(&mut form, &transport).await);
    assert_eq!(transport.call_count(), 0);
    assert_eq!(form.error(), Some("Passwords do not match."));
}

#[tokio::test]
async fn signup_empty_field_never_calls_transport() {
    let transport = MockTransport::new();
    let mut controller = RootController::new(MemoryStorage::new());
    let mut form = filled_signup();
    form.set_email("");

    assert!(!controller.submit_signup(&mut form, &transport).await);
    assert_eq!(transport.call_count(), 0);
    assert_eq!(form.error(), Some("Please fill in all fields."));
}

/// The register result is handed over as `{jwt, user}` directly, not nested
/// under another `data` key, so the dashboard receives real user fields.
#[tokio::test]
async fn signup_success_authenticates_with_register_payload() {
    let body = serde_json::json!({
        "data": {
            "register": {
                "jwt": "t9",
                "user": {
                    "id": "1",
                    "username": "alice",
                    "email": "a@x.com",
                    "documentId": "doc-1",
                    "confirmed": false,
                    "blocked": false,
                    "role": null
                }
            }
        }
    });
    let transport = MockTransport::new().respond(body);
    let mut controller = RootController::new(MemoryStorage::new());
    controller.show_signup();

    assert!(controller.submit_signup(&mut filled_signup(), &transport).await);
    assert_eq!(transport.call_count(), 1);
    assert_eq!(controller.session().token(), Some("t9"));
    let Screen::Dashboard(view) = controller.screen() else {
        panic!("expected dashboard");
    };
    assert_eq!(view.username, "alice");
    assert_eq!(view.confirmed.label, "Unconfirmed");
}

#[tokio::test]
async fn signup_remote_error_keeps_signup_screen() {
    let transport = MockTransport::new().respond(error_body("Email or Username are already taken"));
    let mut controller = RootController::new(MemoryStorage::new());
    controller.show_signup();
    let mut form = filled_signup();

    assert!(!controller.submit_signup(&mut form, &transport).await);
    assert_eq!(form.error(), Some("Email or Username are already taken"));
    assert_eq!(controller.screen(), Screen::Signup);
}

// =============================================================
// complete_* (split submissions)
// =============================================================

/// Storage that rejects every write.
#[derive(Default)]
struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::new("set", key, "quota exceeded"))
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn complete_login_after_begin_submit_adopts_payload() {
    let mut controller = RootController::new(MemoryStorage::new());
    let mut form = filled_login();
    form.begin_submit().unwrap();

    assert!(controller.complete_login(&mut form, Ok(alice_payload("t1"))));
    assert_eq!(controller.session().token(), Some("t1"));
    assert!(!form.is_submitting());
}

#[test]
fn complete_login_storage_failure_is_shown_on_form() {
    let mut controller = RootController::new(ReadOnlyStorage);
    let mut form = filled_login();
    form.begin_submit().unwrap();

    assert!(!controller.complete_login(&mut form, Ok(alice_payload("t1"))));
    assert!(!controller.session().is_authenticated());
    assert!(form.error().is_some_and(|m| m.contains("quota exceeded")));
}

#[test]
fn complete_signup_error_leaves_session_empty() {
    let mut controller = RootController::new(MemoryStorage::new());
    let mut form = filled_signup();
    form.begin_submit().unwrap();

    let result = Err(GraphqlError::Transport("offline".to_owned()));
    assert!(!controller.complete_signup(&mut form, result));
    assert_eq!(form.error(), Some("offline"));
    assert!(!controller.session().is_authenticated());
}
