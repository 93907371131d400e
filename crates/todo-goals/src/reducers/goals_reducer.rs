//! Goals Reducer

use std::rc::Rc;

use crate::actions::{Action, GoalAction};
use crate::state::GoalList;

/// Reducer for the goal list. Starts from an empty list.
pub fn reduce_goals(state: Option<GoalList>, action: &Action) -> GoalList {
    let state = state.unwrap_or_default();
    let Action::Goal(action) = action else {
        return state;
    };

    match action {
        GoalAction::AddGoal { goal } => {
            log::debug!("Adding goal {}: {}", goal.id, goal.name);
            let mut goals = Vec::with_capacity(state.len() + 1);
            goals.extend(state.iter().cloned());
            goals.push(Rc::new(goal.clone()));
            Rc::new(goals)
        }
        GoalAction::RemoveGoal { id } => {
            if !state.iter().any(|goal| goal.id == *id) {
                log::debug!("No goal with id {} to remove", id);
                return state;
            }
            Rc::new(
                state
                    .iter()
                    .filter(|goal| goal.id != *id)
                    .cloned()
                    .collect(),
            )
        }
    }
}
