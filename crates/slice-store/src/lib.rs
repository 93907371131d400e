//! # slice-store
//!
//! A small unidirectional state container: one state slot, changed only by
//! dispatching actions through a pure reducer, with listeners told about every
//! change.
//!
//! ```text
//! dispatch(action) ──→ reducer(state, &action) ──→ state ──→ listeners
//!        ↑                                                       │
//!        └───────────────────────────────────────────────────────┘
//! ```
//!
//! - [`Reducer`]: the `(Option<S>, &A) -> Result<S, E>` contract, with [`pure`]
//!   for reducers that cannot fail
//! - [`combine_reducers!`]: builds a root state and root reducer out of
//!   independent slice reducers, statically
//! - [`Store`]: owns the state and the listener list; single-threaded and
//!   synchronous, re-entrant from listeners
//!
//! There is no global store: create one with [`Store::new`] and
//! pass it (usually as an `Rc`) to whoever needs it.

mod combine;
mod reducer;
mod store;
mod subscription;

pub use reducer::{pure, replay, Pure, Reducer};
pub use store::Store;
pub use subscription::{ListenerId, Subscription};
