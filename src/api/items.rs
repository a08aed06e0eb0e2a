//! Item Endpoints
//!
//! Fetching a list's items and the three item mutations.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};
use crate::models::TodoItem;

#[derive(Deserialize)]
struct ListDetailResponse {
    extras: Vec<TodoItem>,
}

#[derive(Serialize)]
struct CreateItemRequest<'a> {
    title: &'a str,
}

impl ApiClient {
    /// Items of one list, in backend order. They travel in the `extras`
    /// field of the list detail response.
    pub async fn fetch_list_items(&self, list_id: u32) -> Result<Vec<TodoItem>, ApiError> {
        let response = self.get(&format!("lists/{list_id}")).send().await?;
        let body: ListDetailResponse = Self::decode(response).await?;
        Ok(body.extras)
    }

    pub async fn create_item(&self, list_id: u32, title: &str) -> Result<(), ApiError> {
        Self::send_and_check(
            self.post(&format!("items/{list_id}"))
                .json(&CreateItemRequest { title }),
        )
        .await
    }

    pub async fn delete_item(&self, id: u32) -> Result<(), ApiError> {
        Self::send_and_check(self.delete(&format!("items/{id}"))).await
    }

    /// Flip an item between complete and uncomplete. The backend owns the
    /// flip; the client only asks for it and refetches.
    pub async fn toggle_item(&self, id: u32) -> Result<(), ApiError> {
        Self::send_and_check(self.put(&format!("items/{id}/setstatus"))).await
    }
}
