//! Welcome Card Component
//!
//! Post-registration greeting; "go to login" pre-fills the new email.

use leptos::prelude::*;

use crate::context::expect_app_context;
use crate::models::User;
use crate::screen::Screen;

#[component]
pub fn WelcomeCard(user: User) -> impl IntoView {
    let ctx = expect_app_context();
    let username = user.username.clone();

    view! {
        <section class="auth-card welcome">
            <h1>"Welcome, " <span class="username">{username}</span> "!"</h1>
            <p>"Your account is ready."</p>
            <button
                type="button"
                class="go-to-login-btn"
                on:click=move |_| ctx.go_to(Screen::login_as(&user))
            >
                "Go to login"
            </button>
        </section>
    }
}
