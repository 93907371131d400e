//! The reducer contract.

use std::convert::Infallible;

/// A pure state transition: `(previous state, action) -> next state`.
///
/// `None` as previous state means nothing has been reduced yet, so the reducer
/// has to come up with its own initial value. Actions a reducer does not
/// recognise must hand the previous state back untouched.
///
/// Implemented for any `Fn(Option<S>, &A) -> Result<S, E>`. Reducers that
/// cannot fail are wrapped with [`pure`].
pub trait Reducer<S, A> {
    /// Error surfaced to the caller of `dispatch` when the transition is rejected.
    type Error;

    /// Compute the next state. Must not depend on anything but its arguments.
    fn reduce(&self, state: Option<S>, action: &A) -> Result<S, Self::Error>;
}

impl<S, A, E, F> Reducer<S, A> for F
where
    F: Fn(Option<S>, &A) -> Result<S, E>,
{
    type Error = E;

    fn reduce(&self, state: Option<S>, action: &A) -> Result<S, E> {
        self(state, action)
    }
}

/// Adapter for reducers that cannot fail. See [`pure`].
#[derive(Debug, Clone, Copy)]
pub struct Pure<F>(F);

/// Wrap an infallible `Fn(Option<S>, &A) -> S` so it can be used as a [`Reducer`].
pub fn pure<F>(reducer: F) -> Pure<F> {
    Pure(reducer)
}

impl<S, A, F> Reducer<S, A> for Pure<F>
where
    F: Fn(Option<S>, &A) -> S,
{
    type Error = Infallible;

    fn reduce(&self, state: Option<S>, action: &A) -> Result<S, Infallible> {
        Ok((self.0)(state, action))
    }
}

/// Left-fold `reducer` over `actions`, starting from no state.
///
/// This is what a freshly created store holds after dispatching the same
/// actions in order. Stops at the first rejected action.
pub fn replay<S, A, R, I>(reducer: &R, actions: I) -> Result<Option<S>, R::Error>
where
    R: Reducer<S, A>,
    I: IntoIterator<Item = A>,
{
    actions
        .into_iter()
        .try_fold(None, |state, action| reducer.reduce(state, &action).map(Some))
}
