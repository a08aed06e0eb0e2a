//! List Card Component
//!
//! One list: title, delete confirmation, item rows, add-item row.
//! Deleting a list takes its items with it, so it goes through the inline
//! confirm instead of firing on the first click.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{DeleteConfirmButton, ItemRow, NewItemRow};
use crate::context::expect_app_context;
use crate::view_state::ListCardView;

#[component]
pub fn ListCard(card: ListCardView) -> impl IntoView {
    let ctx = expect_app_context();
    let list_id = card.id;

    let delete_list = UnsyncCallback::new(move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.api.delete_list(list_id).await {
                Ok(()) => ctx.reload(),
                Err(err) => log::error!("deleting list {list_id} failed: {err}"),
            }
        });
    });

    view! {
        <section class="list-card">
            <header class="list-card-header">
                <h2 class="list-title">{card.title}</h2>
                <DeleteConfirmButton button_class="delete-list-btn" on_confirm=delete_list />
            </header>

            <ul class="list-items">
                {card
                    .items
                    .into_iter()
                    .map(|item| view! { <ItemRow item=item /> })
                    .collect_view()}
            </ul>

            <NewItemRow list_id=list_id />
        </section>
    }
}
