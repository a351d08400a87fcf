//! A value with explicit subscribe/unsubscribe.
//!
//! Subscribers run synchronously inside `set`, in subscription order. What a
//! subscriber does with the new value (re-render, re-query) is up to the host.
//!
//! `replace` splits an assignment in two: the value changes immediately and the
//! returned `Notification` runs the subscribers whenever it is dispatched. A
//! host that keeps the value behind a lock dispatches after unlocking, so
//! subscribers are free to read through that same lock.

use std::fmt;
use std::sync::Arc;

/// Handle returned by `Observable::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Subscribers captured by `Observable::replace`, waiting to be run.
#[must_use = "subscribers only run when the notification is dispatched"]
pub struct Notification<T> {
    value: T,
    subscribers: Vec<Callback<T>>,
}

impl<T> Notification<T> {
    /// Run every captured subscriber with the new value, in subscription order.
    pub fn dispatch(self) {
        for callback in &self.subscribers {
            callback(&self.value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Notification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// A value whose assignments are pushed to subscribers.
pub struct Observable<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> Observable<T> {
    /// Create an observable with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Register `callback`; it runs on every later assignment.
    ///
    /// # Returns
    /// An id for `unsubscribe`. Ids are never reused by the same observable.
    pub fn subscribe(&mut self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone> Observable<T> {
    /// Replace the value and notify every subscriber, even if the value is unchanged.
    pub fn set(&mut self, value: T) {
        self.replace(value).dispatch();
    }

    /// Replace the value now and defer notification to the returned `Notification`.
    ///
    /// Subscribers are captured at this point; subscribing or unsubscribing
    /// before dispatch does not change who is notified.
    pub fn replace(&mut self, value: T) -> Notification<T> {
        self.value = value;
        Notification {
            value: self.value.clone(),
            subscribers: self
                .subscribers
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
