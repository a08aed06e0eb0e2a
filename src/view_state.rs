//! Board View Model
//!
//! Pure mapping from fetched lists and items to render-ready rows.
//! Everything the board displays is decided here, without touching the DOM,
//! so rendering stays testable. Every reload rebuilds the whole model; a
//! previously built board is never patched in place.

use crate::models::ListWithItems;

/// Render-ready board: one card per list, in backend order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardView {
    pub lists: Vec<ListCardView>,
}

/// One list card with its item rows
#[derive(Debug, Clone, PartialEq)]
pub struct ListCardView {
    pub id: u32,
    pub title: String,
    pub items: Vec<ItemRowView>,
}

/// One render-ready item row
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRowView {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl BoardView {
    /// Total number of items across all lists (footer counter).
    pub fn item_count(&self) -> usize {
        self.lists.iter().map(|list| list.items.len()).sum()
    }
}

impl ItemRowView {
    /// CSS class for the row; completion adds the `completed` hook.
    pub fn row_class(&self) -> &'static str {
        if self.completed {
            "item-row completed"
        } else {
            "item-row"
        }
    }
}

/// Build the board model from fetched data, preserving input order for both
/// lists and their items.
pub fn build_board(lists: Vec<ListWithItems>) -> BoardView {
    let lists = lists
        .into_iter()
        .map(|entry| ListCardView {
            id: entry.list.id,
            title: entry.list.name,
            items: entry
                .items
                .into_iter()
                .map(|item| ItemRowView {
                    id: item.id,
                    title: item.title,
                    // the wire carries 0/1
                    completed: item.completed != 0,
                    created_at: item.created_at,
                    updated_at: item.updated_at,
                })
                .collect(),
        })
        .collect();

    BoardView { lists }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TodoItem, TodoList};

    fn make_item(id: u32, title: &str, completed: u8) -> TodoItem {
        TodoItem {
            id,
            title: title.to_string(),
            completed,
            created_at: "t1".to_string(),
            updated_at: "t1".to_string(),
        }
    }

    fn make_entry(id: u32, name: &str, items: Vec<TodoItem>) -> ListWithItems {
        ListWithItems {
            list: TodoList {
                id,
                name: name.to_string(),
            },
            items,
        }
    }

    #[test]
    fn test_groceries_board() {
        // GET lists -> [{id:1,name:"Groceries"}], GET lists/1 -> one item.
        let board = build_board(vec![make_entry(
            1,
            "Groceries",
            vec![make_item(10, "Milk", 0)],
        )]);

        assert_eq!(board.lists.len(), 1);
        assert_eq!(board.lists[0].title, "Groceries");
        assert_eq!(board.lists[0].items.len(), 1);

        let milk = &board.lists[0].items[0];
        assert_eq!(milk.title, "Milk");
        assert!(!milk.completed);
        assert_eq!(milk.row_class(), "item-row");
        assert_eq!(milk.created_at, "t1");
    }

    #[test]
    fn test_completed_flag_marks_the_row() {
        let board = build_board(vec![make_entry(
            1,
            "Chores",
            vec![make_item(1, "Dishes", 1), make_item(2, "Laundry", 0)],
        )]);

        let items = &board.lists[0].items;
        assert!(items[0].completed);
        assert_eq!(items[0].row_class(), "item-row completed");
        assert!(!items[1].completed);
        assert_eq!(items[1].row_class(), "item-row");
    }

    #[test]
    fn test_input_order_is_preserved() {
        let board = build_board(vec![
            make_entry(3, "Third fetched first", vec![]),
            make_entry(
                1,
                "Groceries",
                vec![
                    make_item(30, "Bread", 0),
                    make_item(10, "Milk", 0),
                    make_item(20, "Eggs", 0),
                ],
            ),
            make_entry(2, "Chores", vec![]),
        ]);

        let list_ids: Vec<u32> = board.lists.iter().map(|l| l.id).collect();
        assert_eq!(list_ids, vec![3, 1, 2]);

        let item_ids: Vec<u32> = board.lists[1].items.iter().map(|i| i.id).collect();
        assert_eq!(item_ids, vec![30, 10, 20]);
    }

    #[test]
    fn test_deleted_item_is_gone_after_rebuild() {
        // The board is rebuilt from a fresh fetch after every mutation, so a
        // deleted item simply never enters the next model.
        let before = build_board(vec![make_entry(
            1,
            "Groceries",
            vec![make_item(10, "Milk", 0), make_item(11, "Butter", 0)],
        )]);
        assert!(before.lists[0].items.iter().any(|i| i.id == 11));

        let after = build_board(vec![make_entry(
            1,
            "Groceries",
            vec![make_item(10, "Milk", 0)],
        )]);
        assert!(!after.lists[0].items.iter().any(|i| i.id == 11));
    }

    #[test]
    fn test_empty_fetch_builds_an_empty_board() {
        let board = build_board(Vec::new());
        assert!(board.lists.is_empty());
        assert_eq!(board.item_count(), 0);
    }

    #[test]
    fn test_item_count_spans_lists() {
        let board = build_board(vec![
            make_entry(1, "A", vec![make_item(1, "x", 0), make_item(2, "y", 1)]),
            make_entry(2, "B", vec![make_item(3, "z", 0)]),
        ]);

        assert_eq!(board.item_count(), 3);
    }
}
