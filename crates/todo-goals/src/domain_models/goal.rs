//! Goal model

use serde::{Deserialize, Serialize};

/// A single entry of the goal list
#[derive(Debug, Clone, Default, Serialize, Deserialize, Eq, PartialEq, Hash)]
pub struct Goal {
    /// Identifier, unique within the list
    pub id: u64,
    pub name: String,
}

impl Goal {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
