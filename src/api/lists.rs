//! List Endpoints
//!
//! Fetching, creating and deleting todo lists, plus the sequenced board
//! fetch that pairs every list with its items before anything renders.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{ListWithItems, TodoList};

#[derive(Serialize)]
struct CreateListRequest<'a> {
    name: &'a str,
}

impl ApiClient {
    /// All lists, in backend order. The backend answers with a bare array.
    pub async fn fetch_lists(&self) -> Result<Vec<TodoList>, ApiError> {
        let response = self.get("lists").send().await?;
        Self::decode(response).await
    }

    /// Every list with its items. Item fetches run one at a time in list
    /// order, so the assembled board is deterministic and complete before
    /// any state is written from it.
    pub async fn fetch_board(&self) -> Result<Vec<ListWithItems>, ApiError> {
        let lists = self.fetch_lists().await?;
        let mut board = Vec::with_capacity(lists.len());
        for list in lists {
            let items = self.fetch_list_items(list.id).await?;
            board.push(ListWithItems { list, items });
        }
        Ok(board)
    }

    pub async fn create_list(&self, name: &str) -> Result<(), ApiError> {
        Self::send_and_check(self.post("lists").json(&CreateListRequest { name })).await
    }

    pub async fn delete_list(&self, id: u32) -> Result<(), ApiError> {
        Self::send_and_check(self.delete(&format!("lists/{id}"))).await
    }
}
