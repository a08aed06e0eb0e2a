//! Ticked Frontend App
//!
//! Root component: builds the API client over browser storage, validates
//! the stored session once on mount, and swaps the top-level screens.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{LoginForm, RegistrationForm, TodoBoard, WelcomeCard};
use crate::config;
use crate::context::AppContext;
use crate::screen::Screen;
use crate::session::BrowserTokens;

#[component]
pub fn App() -> impl IntoView {
    let api = ApiClient::new(config::api_base_url(), Arc::new(BrowserTokens));

    let (screen, set_screen) = signal(Screen::Validating);
    let (reload_epoch, set_reload_epoch) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(
        api.clone(),
        (screen, set_screen),
        (reload_epoch, set_reload_epoch),
    ));

    // Validate the stored token once on mount; tracks no signals, so it
    // never reruns.
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let valid = api.validate().await;
            set_screen.set(Screen::after_validation(valid));
        });
    });

    view! {
        <main class="app">
            {move || match screen.get() {
                Screen::Validating => view! {
                    <div class="validating">"Checking your session..."</div>
                }
                .into_any(),
                Screen::Login { prefill } => view! { <LoginForm prefill=prefill /> }.into_any(),
                Screen::Registration => view! { <RegistrationForm /> }.into_any(),
                Screen::Welcome { user } => view! { <WelcomeCard user=user /> }.into_any(),
                Screen::Board => view! { <TodoBoard /> }.into_any(),
            }}
        </main>
    }
}
