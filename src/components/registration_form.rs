//! Registration Form Component
//!
//! Account creation; a created account routes through the welcome screen
//! back to login.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::context::expect_app_context;
use crate::screen::Screen;

/// An empty username aborts silently; no request goes out.
fn has_username(username: &str) -> bool {
    !username.is_empty()
}

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let ctx = expect_app_context();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let username = username.get();
            if !has_username(&username) {
                return;
            }
            let email = email.get();
            let password = password.get();

            let ctx = ctx.clone();
            spawn_local(async move {
                match ctx.api.register(&username, &email, &password).await {
                    Ok(user) => ctx.go_to(Screen::Welcome { user }),
                    Err(err) => log::error!("registration failed: {err}"),
                }
            });
        }
    };

    view! {
        <section class="auth-card registration">
            <h1>"Create account"</h1>
            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    class="username-input"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(input_value(&ev))
                />
                <input
                    type="text"
                    class="email-input"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(input_value(&ev))
                />
                <input
                    type="password"
                    class="password-input"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(input_value(&ev))
                />
                <button type="submit" class="register-btn">"Create"</button>
            </form>
            <button
                type="button"
                class="back-btn"
                on:click=move |_| ctx.go_to(Screen::login())
            >
                "Back to login"
            </button>
        </section>
    }
}
