//! Domain models
//!
//! The items tracked by the two slices of the application state.

pub mod goal;
pub mod todo;

pub use goal::Goal;
pub use todo::Todo;
