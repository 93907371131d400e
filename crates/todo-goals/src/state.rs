use std::convert::Infallible;
use std::rc::Rc;

use serde::Serialize;
use slice_store::{combine_reducers, pure};

use crate::actions::Action;
use crate::domain_models::{Goal, Todo};
use crate::reducers::{goals_reducer::reduce_goals, todos_reducer::reduce_todos};

/// Todo slice: shared so unchanged lists and items can be handed back as-is
pub type TodoList = Rc<Vec<Rc<Todo>>>;

/// Goal slice
pub type GoalList = Rc<Vec<Rc<Goal>>>;

combine_reducers! {
    /// Application state
    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    pub struct AppState {
        todos: TodoList => pure(reduce_todos),
        goals: GoalList => pure(reduce_goals),
    }

    /// Root reducer - runs every slice reducer on every action
    pub reducer AppReducer(Action) -> Infallible;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        add_goal_action, add_todo_action, remove_goal_action, remove_todo_action,
        toggle_todo_action,
    };
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use slice_store::{replay, Reducer};

    fn reduce(state: Option<AppState>, action: &Action) -> AppState {
        match AppReducer.reduce(state, action) {
            Ok(state) => state,
            Err(never) => match never {},
        }
    }

    fn todos(state: &AppState) -> Vec<Todo> {
        state.todos.iter().map(|todo| (**todo).clone()).collect()
    }

    fn goals(state: &AppState) -> Vec<Goal> {
        state.goals.iter().map(|goal| (**goal).clone()).collect()
    }

    #[test]
    fn test_slices_in_declaration_order() {
        assert_eq!(AppState::SLICES, ["todos", "goals"]);
    }

    #[test]
    fn test_first_reduction_builds_default_slices() {
        let state = reduce(None, &remove_goal_action(0));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_todo_scenario() {
        let state = replay(
            &AppReducer,
            vec![
                add_todo_action(Todo::new(0, "Learn React", false)),
                add_todo_action(Todo::new(1, "Learn Redux", false)),
                remove_todo_action(0),
                toggle_todo_action(1),
            ],
        )
        .unwrap()
        .unwrap();

        assert_eq!(todos(&state), vec![Todo::new(1, "Learn Redux", true)]);
        assert!(state.goals.is_empty());
    }

    #[test]
    fn test_goal_scenario() {
        let state = replay(
            &AppReducer,
            vec![
                add_goal_action(Goal::new(0, "React Dev")),
                add_goal_action(Goal::new(1, "Redux Dev")),
                remove_goal_action(0),
            ],
        )
        .unwrap()
        .unwrap();

        assert_eq!(goals(&state), vec![Goal::new(1, "Redux Dev")]);
        assert!(state.todos.is_empty());
    }

    #[test]
    fn test_add_goal_leaves_todos_slice_identical() {
        let state = reduce(None, &add_todo_action(Todo::new(0, "Learn React", false)));
        let next = reduce(Some(state.clone()), &add_goal_action(Goal::new(0, "React Dev")));

        assert!(Rc::ptr_eq(&state.todos, &next.todos));
        assert!(!Rc::ptr_eq(&state.goals, &next.goals));
    }

    #[test]
    fn test_add_todo_leaves_goals_slice_identical() {
        let state = reduce(None, &add_goal_action(Goal::new(0, "React Dev")));
        let next = reduce(
            Some(state.clone()),
            &add_todo_action(Todo::new(0, "Learn React", false)),
        );

        assert!(Rc::ptr_eq(&state.goals, &next.goals));
        assert!(!Rc::ptr_eq(&state.todos, &next.todos));
    }

    #[test]
    fn test_serializes_as_named_slices() {
        let state = reduce(None, &add_goal_action(Goal::new(1, "Redux Dev")));
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({
                "todos": [],
                "goals": [{ "id": 1, "name": "Redux Dev" }]
            })
        );
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        let name = "[A-Za-z ]{1,12}";
        prop_oneof![
            (0u64..6, name, any::<bool>())
                .prop_map(|(id, name, complete)| add_todo_action(Todo::new(id, name, complete))),
            (0u64..6).prop_map(remove_todo_action),
            (0u64..6).prop_map(toggle_todo_action),
            (0u64..6, name).prop_map(|(id, name)| add_goal_action(Goal::new(id, name))),
            (0u64..6).prop_map(remove_goal_action),
        ]
    }

    proptest! {
        #[test]
        fn reducing_twice_gives_the_same_state(
            prefix in proptest::collection::vec(action_strategy(), 0..12),
            action in action_strategy(),
        ) {
            let state = replay(&AppReducer, prefix).unwrap();
            let first = reduce(state.clone(), &action);
            let second = reduce(state, &action);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn slices_match_their_reducers_run_alone(
            actions in proptest::collection::vec(action_strategy(), 0..24),
        ) {
            let root = replay(&AppReducer, actions.clone()).unwrap().unwrap_or_default();
            let todos = replay(&pure(reduce_todos), actions.clone()).unwrap().unwrap_or_default();
            let goals = replay(&pure(reduce_goals), actions).unwrap().unwrap_or_default();
            prop_assert_eq!(root.todos, todos);
            prop_assert_eq!(root.goals, goals);
        }
    }
}
