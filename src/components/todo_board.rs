//! Todo Board Component
//!
//! The authenticated screen: top bar, new-list form, one card per list,
//! and a footer with counts. Every reload epoch refetches everything and
//! replaces the whole board model in one write.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ListCard, NewListForm};
use crate::context::expect_app_context;
use crate::view_state::{build_board, BoardView};

#[component]
pub fn TodoBoard() -> impl IntoView {
    let ctx = expect_app_context();

    let (board, set_board) = signal(BoardView::default());

    // Full refetch on mount and after every mutation.
    Effect::new({
        let ctx = ctx.clone();
        move |_| {
            let _ = ctx.reload_epoch.get();
            let api = ctx.api.clone();
            spawn_local(async move {
                match api.fetch_board().await {
                    Ok(lists) => set_board.set(build_board(lists)),
                    Err(err) => log::error!("board fetch failed: {err}"),
                }
            });
        }
    });

    view! {
        <div class="board">
            <header class="board-toolbar">
                <span class="board-title">"Ticked"</span>
                <button
                    type="button"
                    class="logout-btn"
                    on:click=move |_| ctx.logout()
                >
                    "Log out"
                </button>
            </header>

            <NewListForm />

            <div class="lists">
                {move || {
                    board
                        .get()
                        .lists
                        .into_iter()
                        .map(|card| view! { <ListCard card=card /> })
                        .collect_view()
                }}
            </div>

            <footer class="board-footer">
                <span class="list-count">
                    {move || board.get().lists.len()} " lists"
                </span>
                <span class="item-count">
                    {move || board.get().item_count()} " items"
                </span>
            </footer>
        </div>
    }
}
