//! Root component: owns the controller signal and switches between pages.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::signup::SignupPage;
use crate::state::auth::{Controller, Page};
use crate::util::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Hydrates from localStorage exactly once, before the first render.
    let controller = RwSignal::new(Controller::new(BrowserStorage));
    provide_context(controller);

    let page = Memo::new(move |_| controller.with(|c| Page::of(&c.screen())));

    view! {
        <Title text=move || page.get().title() />
        <main class="app">
            {move || match page.get() {
                Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                Page::Login => view! { <LoginPage /> }.into_any(),
                Page::Signup => view! { <SignupPage /> }.into_any(),
            }}
        </main>
    }
}
