//! Actions for the todo list.

use super::Action;
use crate::domain_models::Todo;
use serde::{Deserialize, Serialize};

pub const ADD_TODO: &str = "ADD_TODO";
pub const REMOVE_TODO: &str = "REMOVE_TODO";
pub const TOGGLE_TODO: &str = "TOGGLE_TODO";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a todo to the end of the list
    AddTodo { todo: Todo },

    /// Remove the todo with this id, if any
    RemoveTodo { id: u64 },

    /// Flip `complete` of the todo with this id, if any
    ToggleTodo { id: u64 },
}

impl TodoAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => ADD_TODO,
            Self::RemoveTodo { .. } => REMOVE_TODO,
            Self::ToggleTodo { .. } => TOGGLE_TODO,
        }
    }
}

pub fn add_todo_action(todo: Todo) -> Action {
    TodoAction::AddTodo { todo }.into()
}

pub fn remove_todo_action(id: u64) -> Action {
    TodoAction::RemoveTodo { id }.into()
}

pub fn toggle_todo_action(id: u64) -> Action {
    TodoAction::ToggleTodo { id }.into()
}
