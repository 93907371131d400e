use std::rc::Rc;

use slice_store::Store;

use crate::actions::Action;
use crate::state::{AppReducer, AppState};

/// Store for the todo/goal application
pub type AppStore = Store<AppState, Action, AppReducer>;

/// Create an empty store, shared so listeners can hold a weak handle to it
pub fn create_store() -> Rc<AppStore> {
    Rc::new(Store::new(AppReducer))
}
