//! State printer listener
//!
//! Writes the whole state as JSON to stdout after every change.

use std::rc::Weak;

use crate::state::AppState;
use crate::store::AppStore;

pub fn format_state(state: &AppState, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(state)
    } else {
        serde_json::to_string(state)
    }
}

/// Listener printing `The new state is: <json>` for the store behind `store`
pub fn state_printer(store: Weak<AppStore>, pretty: bool) -> impl Fn() + 'static {
    move || {
        let Some(store) = store.upgrade() else {
            return;
        };
        store.with_state(|state| {
            let Some(state) = state else {
                return;
            };
            match format_state(state, pretty) {
                Ok(json) => println!("The new state is: {}", json),
                Err(e) => log::error!("Failed to serialize state: {}", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::add_todo_action;
    use crate::domain_models::Todo;
    use crate::store::create_store;
    use std::rc::Rc;

    #[test]
    fn test_format_compact() {
        let store = create_store();
        store
            .dispatch(add_todo_action(Todo::new(0, "Learn React", false)))
            .unwrap();

        let json = format_state(&store.state().unwrap(), false).unwrap();
        assert_eq!(
            json,
            r#"{"todos":[{"id":0,"name":"Learn React","complete":false}],"goals":[]}"#
        );
    }

    #[test]
    fn test_format_pretty_is_multiline() {
        let json = format_state(&AppState::default(), true).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"todos\": []"));
    }

    #[test]
    fn test_printer_outlives_store_quietly() {
        let store = create_store();
        let printer = state_printer(Rc::downgrade(&store), false);
        drop(store);
        printer();
    }
}
