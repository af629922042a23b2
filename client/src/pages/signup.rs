//! Signup page: username, email, and a confirmed password.
//!
//! Local validation runs before any request; a successful `register` signs
//! the user in directly.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use session::form::SignupForm;

use super::login::{password_input_type, visibility_label};
use crate::state::auth::Controller;

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Creating Account..." } else { "Create Account" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let controller = expect_context::<RwSignal<Controller>>();
    let form = RwSignal::new(SignupForm::new());
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(SignupForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::graphql::FetchTransport::new();
            let result =
                session::graphql::register(&transport, &request.email, &request.password, &request.username).await;
            form.update(|f| {
                controller.update(|c| {
                    c.complete_signup(f, result);
                });
            });
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, controller);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Sign up to get started"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Username"
                        <input
                            class="auth-input"
                            type="text"
                            prop:value=move || form.with(|f| f.username().to_owned())
                            on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                        />
                    </label>
                    <label class="auth-label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email().to_owned())
                            on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        />
                    </label>
                    <label class="auth-label">
                        "Password"
                        <div class="auth-password">
                            <input
                                class="auth-input"
                                type=move || password_input_type(show_password.get())
                                prop:value=move || form.with(|f| f.password().to_owned())
                                on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                            />
                            <button
                                class="auth-password__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || visibility_label(show_password.get())}
                            </button>
                        </div>
                    </label>
                    <label class="auth-label">
                        "Confirm Password"
                        <div class="auth-password">
                            <input
                                class="auth-input"
                                type=move || password_input_type(show_confirm.get())
                                prop:value=move || form.with(|f| f.confirm_password().to_owned())
                                on:input=move |ev| form.update(|f| f.set_confirm_password(event_target_value(&ev)))
                            />
                            <button
                                class="auth-password__toggle"
                                type="button"
                                on:click=move |_| show_confirm.update(|v| *v = !*v)
                            >
                                {move || visibility_label(show_confirm.get())}
                            </button>
                        </div>
                    </label>
                    <Show when=move || form.with(|f| f.error().is_some())>
                        <p class="auth-error">{move || form.with(|f| f.error().unwrap_or_default().to_owned())}</p>
                    </Show>
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || form.with(SignupForm::is_submitting)
                    >
                        {move || submit_label(form.with(SignupForm::is_submitting))}
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <button class="auth-link" type="button" on:click=move |_| controller.update(Controller::show_login)>
                        "Sign in"
                    </button>
                </p>
            </div>
        </div>
    }
}
