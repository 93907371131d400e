//! Todos Reducer

use std::rc::Rc;

use crate::actions::{Action, TodoAction};
use crate::state::TodoList;

/// Reducer for the todo list.
///
/// Starts from an empty list. Todos that are not touched keep their
/// allocation, so `Rc::ptr_eq` tells which ones changed.
pub fn reduce_todos(state: Option<TodoList>, action: &Action) -> TodoList {
    let state = state.unwrap_or_default();
    let Action::Todo(action) = action else {
        return state;
    };

    match action {
        TodoAction::AddTodo { todo } => {
            log::debug!("Adding todo {}: {}", todo.id, todo.name);
            let mut todos = Vec::with_capacity(state.len() + 1);
            todos.extend(state.iter().cloned());
            todos.push(Rc::new(todo.clone()));
            Rc::new(todos)
        }
        TodoAction::RemoveTodo { id } => {
            if !state.iter().any(|todo| todo.id == *id) {
                log::debug!("No todo with id {} to remove", id);
                return state;
            }
            Rc::new(
                state
                    .iter()
                    .filter(|todo| todo.id != *id)
                    .cloned()
                    .collect(),
            )
        }
        TodoAction::ToggleTodo { id } => {
            if !state.iter().any(|todo| todo.id == *id) {
                log::debug!("No todo with id {} to toggle", id);
                return state;
            }
            Rc::new(
                state
                    .iter()
                    .map(|todo| {
                        if todo.id == *id {
                            Rc::new(todo.toggled())
                        } else {
                            Rc::clone(todo)
                        }
                    })
                    .collect(),
            )
        }
    }
}
