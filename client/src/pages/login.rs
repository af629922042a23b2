//! Login page: identifier + password against the `login` mutation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use session::form::LoginForm;

use crate::state::auth::Controller;

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Signing in..." } else { "Sign In" }
}

pub(super) fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

pub(super) fn visibility_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let controller = expect_context::<RwSignal<Controller>>();
    let form = RwSignal::new(LoginForm::new());
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::graphql::FetchTransport::new();
            let result = session::graphql::login(&transport, &request.identifier, &request.password).await;
            form.update(|f| {
                controller.update(|c| {
                    c.complete_login(f, result);
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
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label">
                        "Email or Username"
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.identifier().to_owned())
                            on:input=move |ev| form.update(|f| f.set_identifier(event_target_value(&ev)))
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
                    <Show when=move || form.with(|f| f.error().is_some())>
                        <p class="auth-error">{move || form.with(|f| f.error().unwrap_or_default().to_owned())}</p>
                    </Show>
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || form.with(LoginForm::is_submitting)
                    >
                        {move || submit_label(form.with(LoginForm::is_submitting))}
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <button class="auth-link" type="button" on:click=move |_| controller.update(Controller::show_signup)>
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
