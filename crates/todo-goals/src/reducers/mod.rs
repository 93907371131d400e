//! Slice reducers
//!
//! One reducer per slice of [`AppState`](crate::state::AppState). Each takes the
//! whole [`Action`](crate::actions::Action) and returns its slice untouched
//! (same allocation) for actions of other domains.

pub mod goals_reducer;
pub mod todos_reducer;
