//! Last-value-cached change notification.
//!
//! The channel delivers synchronously, in the caller's stack: by the time
//! `publish` returns, every subscriber has observed the value. The last
//! published value is cached so a late subscriber immediately sees the
//! current state instead of waiting for the next change.

use std::cell::RefCell;
use uuid::Uuid;

type Callback<T> = Box<dyn FnMut(&T) + Send>;

struct Subscriber<T> {
    id: Uuid,
    callback: Callback<T>,
}

struct Inner<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
    dispatching: bool,
    pending_removals: Vec<Uuid>,
}

/// Token returned by [`ChangeChannel::subscribe`], required to unsubscribe.
#[must_use = "dropping the subscription token makes the listener permanent"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: Uuid,
}

/// A push-based observable that caches its last value.
///
/// Single-threaded by design: one controller, one logical thread (see the
/// crate docs). The channel is still `Send`, so a controller can move
/// between threads wholesale.
///
/// ```rust
/// use instinct::ChangeChannel;
/// use std::sync::{Arc, Mutex};
///
/// let channel = ChangeChannel::new(0i32);
/// let seen = Arc::new(Mutex::new(Vec::new()));
///
/// let sink = Arc::clone(&seen);
/// let subscription = channel.subscribe(move |value| sink.lock().unwrap().push(*value));
///
/// channel.publish(1);
/// channel.publish(2);
/// channel.unsubscribe(subscription);
/// channel.publish(3);
///
/// // The cached 0 was replayed at subscribe time; 3 arrived after the
/// // unsubscribe.
/// assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
/// ```
pub struct ChangeChannel<T> {
    inner: RefCell<Inner<T>>,
}

impl<T: Clone> ChangeChannel<T> {
    /// Create a channel holding `initial` as its cached value.
    pub fn new(initial: T) -> Self {
        Self {
            inner: RefCell::new(Inner {
                value: initial,
                subscribers: Vec::new(),
                dispatching: false,
                pending_removals: Vec::new(),
            }),
        }
    }

    /// A clone of the last published (or initial) value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Register a listener. The cached value is replayed to it immediately,
    /// before this call returns.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&T) + Send + 'static,
    {
        let mut callback: Callback<T> = Box::new(callback);
        let current = self.inner.borrow().value.clone();
        // Replay outside the borrow so the listener may use the channel.
        callback(&current);

        let id = Uuid::new_v4();
        self.inner
            .borrow_mut()
            .subscribers
            .push(Subscriber { id, callback });
        Subscription { id }
    }

    /// Remove a listener. Safe to call from inside a callback; the removal
    /// then takes effect after the in-flight dispatch.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut inner = self.inner.borrow_mut();
        if inner.dispatching {
            inner.pending_removals.push(subscription.id);
        } else {
            inner.subscribers.retain(|s| s.id != subscription.id);
        }
    }

    /// Cache `value` and deliver it to every subscriber, in subscription
    /// order, within this call.
    pub fn publish(&self, value: T) {
        let mut active = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.dispatching = true;
            // Take the list out so callbacks may subscribe/unsubscribe
            // without hitting the RefCell.
            std::mem::take(&mut inner.subscribers)
        };

        for subscriber in active.iter_mut() {
            (subscriber.callback)(&value);
        }

        let mut inner = self.inner.borrow_mut();
        inner.dispatching = false;
        let added = std::mem::take(&mut inner.subscribers);
        active.extend(added);
        let removed = std::mem::take(&mut inner.pending_removals);
        if !removed.is_empty() {
            active.retain(|s| !removed.contains(&s.id));
        }
        inner.subscribers = active;
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}
