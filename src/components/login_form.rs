//! Login Form Component
//!
//! Credential form plus the jump-off point to registration.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{alert, input_value};
use crate::context::expect_app_context;
use crate::screen::Screen;

/// An empty username aborts silently; no request goes out.
fn has_username(username: &str) -> bool {
    !username.is_empty()
}

/// Login form, optionally pre-filled with the email of a just-created
/// account.
#[component]
pub fn LoginForm(#[prop(optional_no_strip)] prefill: Option<String>) -> impl IntoView {
    let ctx = expect_app_context();

    let (email, set_email) = signal(prefill.unwrap_or_default());
    let (password, set_password) = signal(String::new());

    let submit = {
        let ctx = ctx.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let email = email.get();
            let password = password.get();
            if !has_username(&email) {
                return;
            }

            let ctx = ctx.clone();
            spawn_local(async move {
                match ctx.api.login(&email, &password).await {
                    Ok(_) => ctx.go_to(Screen::Board),
                    Err(err) if err.is_rejection() => {
                        alert("No user found with the credentials provided.");
                    }
                    Err(err) => log::error!("login failed: {err}"),
                }
            });
        }
    };

    view! {
        <section class="auth-card login">
            <h1>"Log in"</h1>
            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    class="username-input"
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
                <button type="submit" class="login-btn">"Log in"</button>
            </form>
            <button
                type="button"
                class="create-account-btn"
                on:click=move |_| ctx.go_to(Screen::Registration)
            >
                "Create account"
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_does_not_submit() {
        assert!(!has_username(""));
    }

    #[test]
    fn test_filled_username_submits() {
        assert!(has_username("ada@example.com"));
    }
}
