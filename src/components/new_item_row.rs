//! New Item Row Component
//!
//! The add-item input at the bottom of every list card. An empty title is
//! the one validation case that alerts instead of failing silently.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{alert, input_value};
use crate::context::expect_app_context;

#[component]
pub fn NewItemRow(list_id: u32) -> impl IntoView {
    let ctx = expect_app_context();

    let (title, set_title) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.is_empty() {
            alert("You need to write a title");
            return;
        }

        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.api.create_item(list_id, &title).await {
                Ok(()) => {
                    set_title.set(String::new());
                    ctx.reload();
                }
                Err(err) => log::error!("adding an item to list {list_id} failed: {err}"),
            }
        });
    };

    view! {
        <form class="new-item-row" on:submit=add_item>
            <input
                type="text"
                class="item-title-input"
                placeholder="New item..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(input_value(&ev))
            />
            <button type="submit" class="add-item-btn">"Add"</button>
        </form>
    }
}
