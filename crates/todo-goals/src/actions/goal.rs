//! Actions for the goal list.

use super::Action;
use crate::domain_models::Goal;
use serde::{Deserialize, Serialize};

pub const ADD_GOAL: &str = "ADD_GOAL";
pub const REMOVE_GOAL: &str = "REMOVE_GOAL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalAction {
    /// Append a goal to the end of the list
    AddGoal { goal: Goal },

    /// Remove the goal with this id, if any
    RemoveGoal { id: u64 },
}

impl GoalAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddGoal { .. } => ADD_GOAL,
            Self::RemoveGoal { .. } => REMOVE_GOAL,
        }
    }
}

pub fn add_goal_action(goal: Goal) -> Action {
    GoalAction::AddGoal { goal }.into()
}

pub fn remove_goal_action(id: u64) -> Action {
    GoalAction::RemoveGoal { id }.into()
}
