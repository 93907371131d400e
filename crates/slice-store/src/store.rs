use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::reducer::Reducer;
use crate::subscription::{ListenerSet, Subscription};

/// Store - holds the application state and runs the reducer loop
///
/// The Store follows the Redux pattern:
/// - One state slot, empty until the first dispatch
/// - Actions are dispatched to request state changes
/// - A pure reducer computes the next state, which replaces the old one
/// - Listeners are told afterwards and read the new state back from the store
///
/// All methods take `&self`, so listeners holding a (weak) reference to the
/// store can read state, subscribe, unsubscribe or even dispatch again while
/// a notification is running. Nothing is borrowed while the reducer or a
/// listener runs.
///
/// ```
/// use std::rc::Rc;
/// use slice_store::{pure, Store};
///
/// fn counter(state: Option<i64>, delta: &i64) -> i64 {
///     state.unwrap_or_default() + delta
/// }
///
/// let store: Rc<Store<i64, i64, _>> = Rc::new(Store::new(pure(counter)));
/// let weak = Rc::downgrade(&store);
/// let subscription = store.subscribe(move || {
///     if let Some(store) = weak.upgrade() {
///         println!("count is now {:?}", store.state());
///     }
/// });
///
/// store.dispatch(2).unwrap();
/// store.dispatch(3).unwrap();
/// assert_eq!(store.state(), Some(5));
/// subscription.unsubscribe();
/// ```
pub struct Store<S, A, R> {
    reducer: R,
    state: RefCell<Option<S>>,
    listeners: Rc<RefCell<ListenerSet>>,
    _action: PhantomData<fn(A)>,
}

impl<S, A, R> Store<S, A, R>
where
    S: Clone,
    R: Reducer<S, A>,
{
    /// Create a store around the root reducer. The state stays `None` until
    /// the first successful dispatch.
    pub fn new(reducer: R) -> Self {
        Self {
            reducer,
            state: RefCell::new(None),
            listeners: Rc::new(RefCell::new(ListenerSet::default())),
            _action: PhantomData,
        }
    }

    /// Get a copy of the current state
    ///
    /// Keep slices behind `Rc` to make this cheap.
    pub fn state(&self) -> Option<S> {
        self.state.borrow().clone()
    }

    /// Borrow the current state for the duration of `f`.
    ///
    /// `f` must not dispatch on this store.
    pub fn with_state<T>(&self, f: impl FnOnce(Option<&S>) -> T) -> T {
        f(self.state.borrow().as_ref())
    }

    /// Register a listener, called with no arguments after every successful
    /// dispatch, after listeners subscribed earlier.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.listeners.borrow_mut().insert(Rc::new(listener));
        log::debug!("Listener {:?} subscribed", id);
        Subscription::new(id, &self.listeners)
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Run `action` through the reducer, store the result and notify listeners
    ///
    /// The new state replaces the old one even when the reducer handed back
    /// the same value. Listeners registered at the time of the replacement are
    /// then invoked in subscription order before this returns.
    ///
    /// If the reducer rejects the action its error is returned, the state is
    /// left as it was and no listener is invoked.
    pub fn dispatch(&self, action: A) -> Result<(), R::Error> {
        let previous = self.state.borrow().clone();
        let next = match self.reducer.reduce(previous, &action) {
            Ok(next) => next,
            Err(e) => {
                log::debug!("Reducer rejected action, state unchanged");
                return Err(e);
            }
        };
        drop(self.state.replace(Some(next)));

        self.notify();
        Ok(())
    }

    fn notify(&self) {
        let snapshot = self.listeners.borrow().snapshot();
        log::trace!("Notifying {} listener(s)", snapshot.len());
        for listener in snapshot {
            listener();
        }
    }
}

impl<S, A, R> fmt::Debug for Store<S, A, R>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}
