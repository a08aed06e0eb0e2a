//! Item Row Component
//!
//! One todo item: completion toggle, title, created/updated meta, delete.
//! Rows are rebuilt with the board on every reload and capture their item
//! id by value, so a handler can never act on a stale row.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::expect_app_context;
use crate::view_state::ItemRowView;

#[component]
pub fn ItemRow(item: ItemRowView) -> impl IntoView {
    let ctx = expect_app_context();
    let item_id = item.id;
    let row_class = item.row_class();
    let check_mark = if item.completed { "☑" } else { "☐" };

    let toggle = {
        let ctx = ctx.clone();
        move |_| {
            let ctx = ctx.clone();
            spawn_local(async move {
                match ctx.api.toggle_item(item_id).await {
                    Ok(()) => ctx.reload(),
                    Err(err) => log::error!("toggling item {item_id} failed: {err}"),
                }
            });
        }
    };

    // One-click, like the original; only list deletion asks for a confirm.
    let delete = move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.api.delete_item(item_id).await {
                Ok(()) => ctx.reload(),
                Err(err) => log::error!("deleting item {item_id} failed: {err}"),
            }
        });
    };

    view! {
        <li class=row_class>
            <button type="button" class="item-check" on:click=toggle>
                {check_mark}
            </button>
            <span class="item-title">{item.title}</span>
            <span class="item-meta">
                <span class="item-meta-created">{item.created_at}</span>
                <span class="item-meta-updated">{item.updated_at}</span>
            </span>
            <button type="button" class="item-delete" on:click=delete>"×"</button>
        </li>
    }
}
