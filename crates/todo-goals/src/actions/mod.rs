//! Actions module
//!
//! Actions are grouped by the slice they are meant for. Every slice reducer
//! still sees every action; it simply passes through the ones of other slices.
//!
//! On the wire (action scripts, logs) an action is a flat record tagged by its
//! discriminant, e.g. `{ "type": "ADD_TODO", "todo": { ... } }`.

pub mod goal;
pub mod todo;

#[allow(unused_imports)]
pub use goal::{add_goal_action, remove_goal_action, GoalAction, ADD_GOAL, REMOVE_GOAL};
#[allow(unused_imports)]
pub use todo::{
    add_todo_action, remove_todo_action, toggle_todo_action, TodoAction, ADD_TODO, REMOVE_TODO,
    TOGGLE_TODO,
};

use serde::{Deserialize, Serialize};

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    /// Todo list actions
    Todo(TodoAction),
    /// Goal list actions
    Goal(GoalAction),
}

impl Action {
    /// Every discriminant an action record may carry
    pub const KINDS: [&'static str; 5] = [ADD_TODO, REMOVE_TODO, TOGGLE_TODO, ADD_GOAL, REMOVE_GOAL];

    /// The `type` discriminant of this action
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Todo(action) => action.kind(),
            Self::Goal(action) => action.kind(),
        }
    }
}

impl From<TodoAction> for Action {
    fn from(action: TodoAction) -> Self {
        Self::Todo(action)
    }
}

impl From<GoalAction> for Action {
    fn from(action: GoalAction) -> Self {
        Self::Goal(action)
    }
}
