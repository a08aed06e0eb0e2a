//! Frontend Models
//!
//! Data structures matching the todo backend's wire format.

use serde::Deserialize;

/// A todo list (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodoList {
    pub id: u32,
    pub name: String,
}

/// A single todo item (matches backend)
///
/// `completed` crosses the wire as 0/1; the view-state layer maps it to a
/// bool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub title: String,
    pub completed: u8,
    pub created_at: String,
    pub updated_at: String,
}

/// A registered user, as echoed by the registration endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}

/// One list together with its fetched items, assembled by the board fetch
#[derive(Debug, Clone, PartialEq)]
pub struct ListWithItems {
    pub list: TodoList,
    pub items: Vec<TodoItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_decodes_numeric_completed() {
        let item: TodoItem = serde_json::from_value(json!({
            "id": 10,
            "title": "Milk",
            "completed": 0,
            "created_at": "t1",
            "updated_at": "t1"
        }))
        .expect("item should decode");

        assert_eq!(item.id, 10);
        assert_eq!(item.title, "Milk");
        assert_eq!(item.completed, 0);
    }

    #[test]
    fn test_item_ignores_unknown_fields() {
        // Backends tend to grow columns; the client only reads what it renders.
        let item: TodoItem = serde_json::from_value(json!({
            "id": 3,
            "title": "Eggs",
            "completed": 1,
            "created_at": "t1",
            "updated_at": "t2",
            "list_id": 1,
            "owner": "ada"
        }))
        .expect("item should decode");

        assert_eq!(item.completed, 1);
    }

    #[test]
    fn test_list_decodes_name_field() {
        let list: TodoList = serde_json::from_value(json!({"id": 1, "name": "Groceries"}))
            .expect("list should decode");

        assert_eq!(list.name, "Groceries");
    }
}
