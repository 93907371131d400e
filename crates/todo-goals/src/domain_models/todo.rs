//! Todo model

use serde::{Deserialize, Serialize};

/// A single entry of the todo list
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub struct Todo {
    /// Identifier, unique within the list
    pub id: u64,
    pub name: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(id: u64, name: impl Into<String>, complete: bool) -> Self {
        Self {
            id,
            name: name.into(),
            complete,
        }
    }

    /// Copy of this todo with `complete` flipped
    pub fn toggled(&self) -> Self {
        Self {
            complete: !self.complete,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_only_complete() {
        let todo = Todo::new(3, "Learn Redux", false);
        let toggled = todo.toggled();

        assert_eq!(toggled, Todo::new(3, "Learn Redux", true));
        assert_eq!(toggled.toggled(), todo);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Todo::new(0, "Learn React", false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 0, "name": "Learn React", "complete": false })
        );
    }
}
