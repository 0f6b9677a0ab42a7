//! Synchronous observer registry.

use log::error;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn Fn(&E)>;

/// Publish/subscribe fan-out for one event type.
pub struct Notifier<E> {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<E>)>,
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }
}

impl<E> Notifier<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for future events only.
    pub fn subscribe(&mut self, callback: impl Fn(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes one observer. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(candidate, _)| *candidate != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Delivers `event` to every observer in registration order.
    ///
    /// Returns how many observers panicked. Each panic is caught and logged.
    pub fn notify(&self, event: &E) -> usize {
        let mut failed = 0;
        for (id, callback) in &self.subscribers {
            if catch_unwind(AssertUnwindSafe(|| callback(event))).is_err() {
                failed += 1;
                error!(
                    "event=notify_observer module=notify status=error subscription={} error_code=observer_panicked",
                    id.0
                );
            }
        }
        failed
    }
}

impl<E> std::fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
