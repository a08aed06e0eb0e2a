//! New List Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::input_value;
use crate::context::expect_app_context;

/// Single-input form for creating a new list.
#[component]
pub fn NewListForm() -> impl IntoView {
    let ctx = expect_app_context();

    let (name, set_name) = signal(String::new());

    let create_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get();
        if name.is_empty() {
            return;
        }

        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.api.create_list(&name).await {
                Ok(()) => {
                    set_name.set(String::new());
                    ctx.reload();
                }
                Err(err) => log::error!("creating list failed: {err}"),
            }
        });
    };

    view! {
        <form class="new-list-form" on:submit=create_list>
            <input
                type="text"
                class="list-name-input"
                placeholder="New list..."
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(input_value(&ev))
            />
            <button type="submit" class="add-list-btn">"Add list"</button>
        </form>
    }
}
