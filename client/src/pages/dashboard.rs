//! Dashboard page: profile and role of the signed-in user, plus logout.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use session::dashboard::{Badge, DashboardView};

use crate::state::auth::Controller;

fn badge_class(badge: Badge) -> &'static str {
    if badge.positive { "badge badge--positive" } else { "badge badge--negative" }
}

fn greeting(username: &str) -> String {
    format!("Welcome back, {username}!")
}

#[component]
fn ProfileField(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="profile-field">
            <span class="profile-field__label">{label}</span>
            <span class="profile-field__value">{move || value.get()}</span>
        </div>
    }
}

#[component]
fn StatusBadge(label: &'static str, #[prop(into)] badge: Signal<Badge>) -> impl IntoView {
    view! {
        <div class="profile-field">
            <span class="profile-field__label">{label}</span>
            <span class=move || badge_class(badge.get())>{move || badge.get().label}</span>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let controller = expect_context::<RwSignal<Controller>>();
    let view_model = Memo::new(move |_| controller.with(|c| DashboardView::from_session(c.session())));
    let field = move |read: fn(&DashboardView) -> &str| Signal::derive(move || view_model.with(|v| read(v).to_owned()));

    let on_logout = move |_| {
        controller.update(|c| {
            if let Err(e) = c.on_logout() {
                leptos::logging::warn!("logout did not clear stored session: {e}");
            }
        });
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>{move || view_model.with(|v| greeting(&v.username))}</h1>
                <button class="auth-button auth-button--secondary" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <section class="dashboard__card">
                <h2>"Profile"</h2>
                <ProfileField label="Username" value=field(|v| &v.username) />
                <ProfileField label="Email" value=field(|v| &v.email) />
                <ProfileField label="User ID" value=field(|v| &v.user_id) />
                <StatusBadge label="Email Confirmed" badge=Signal::derive(move || view_model.with(|v| v.confirmed)) />
                <StatusBadge label="Account Status" badge=Signal::derive(move || view_model.with(|v| v.status)) />
            </section>
            <section class="dashboard__card">
                <h2>"Role"</h2>
                <ProfileField label="Role ID" value=field(|v| &v.role_id) />
                <ProfileField label="Name" value=field(|v| &v.role_name) />
                <ProfileField label="Description" value=field(|v| &v.role_description) />
                <ProfileField label="Type" value=field(|v| &v.role_type) />
            </section>
        </div>
    }
}
