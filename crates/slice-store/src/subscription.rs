//! Listener registry and the handle returned by `Store::subscribe`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback invoked after every successful dispatch.
pub(crate) type Listener = Rc<dyn Fn()>;

/// Identifies one registration. Subscribing the same closure twice yields two ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Ordered collection of registered listeners (oldest first).
#[derive(Default)]
pub(crate) struct ListenerSet {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl ListenerSet {
    pub(crate) fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns `false` when `id` was not registered (already removed).
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copy of the current registrations, in subscription order.
    ///
    /// Notification walks this copy, so changes made by a listener while it
    /// runs only show up on the next dispatch.
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect()
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("next_id", &self.next_id)
            .field(
                "ids",
                &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Handle for removing a listener again.
///
/// Dropping the handle keeps the listener registered; only
/// [`unsubscribe`](Subscription::unsubscribe) removes it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: ListenerId,
    listeners: Weak<RefCell<ListenerSet>>,
}

impl Subscription {
    pub(crate) fn new(id: ListenerId, listeners: &Rc<RefCell<ListenerSet>>) -> Self {
        Self {
            id,
            listeners: Rc::downgrade(listeners),
        }
    }

    /// The registration this handle removes. Distinct for every `subscribe`
    /// call on a store, even when the same closure is registered twice.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Remove this registration. Calling it again, or after the store is gone,
    /// does nothing.
    pub fn unsubscribe(&self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        if listeners.borrow_mut().remove(self.id) {
            log::debug!("Listener {:?} unsubscribed", self.id);
        } else {
            log::trace!("Listener {:?} was already unsubscribed", self.id);
        }
    }

    /// Whether the listener is still registered with a live store.
    pub fn is_active(&self) -> bool {
        self.listeners
            .upgrade()
            .map(|listeners| listeners.borrow().contains(self.id))
            .unwrap_or(false)
    }
}
