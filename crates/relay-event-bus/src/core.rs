//! The aggregation hub: registry of interest plus the dispatch pass.
//!
//! [`EventAggregator`] is the one shared mutable resource of the whole
//! pattern. Internally it is a keyed registry (event type → ordered
//! subscriptions) behind a mutex; the handle itself is a cheap `Arc`
//! clone, which is how it gets injected into publishers and
//! subscribers.
//!
//! Dispatch is synchronous: `publish` runs every matching action to
//! completion on the calling thread before returning. The registry lock
//! is *not* held while actions run — `publish` snapshots the matching
//! subscriptions first — so actions are free to subscribe or
//! unsubscribe re-entrantly, and a subscribe racing an in-flight
//! publish may or may not be seen by that particular pass.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use relay_types::EventKey;

use crate::message::Message;
use crate::subscription::{Action, Subscription};

/// Counters for aggregator activity.
#[derive(Debug, Clone, Default)]
pub struct AggregatorStats {
    /// Total number of publish calls.
    pub events_published: usize,
    /// Total number of deliveries attempted (one per matching
    /// subscription per publish; a panicking action still counts the
    /// rest of its pass as attempted).
    pub events_delivered: usize,
    /// Subscriptions currently registered.
    pub active_subscriptions: usize,
    /// Subscriptions ever created.
    pub total_subscriptions: usize,
}

/// Mapping from event-type key to the ordered, currently-active
/// subscriptions for it. Not thread-safe on its own; [`EventAggregator`]
/// wraps it in a mutex.
struct Registry<K, P> {
    subscriptions: HashMap<K, Vec<Subscription<K, P>>>,
    stats: AggregatorStats,
}

impl<K: EventKey, P: 'static> Registry<K, P> {
    fn new() -> Self {
        Self {
            subscriptions: HashMap::new(),
            stats: AggregatorStats::default(),
        }
    }

    fn subscribe(&mut self, event_type: K, action: Action<K, P>) -> Subscription<K, P> {
        let token = Subscription::new(event_type.clone(), action);
        self.subscriptions
            .entry(event_type)
            .or_default()
            .push(token.clone());
        self.stats.active_subscriptions += 1;
        self.stats.total_subscriptions += 1;
        log::trace!(
            "[EventAggregator] new subscription {:?} for {:?}",
            token.id(),
            token.event_type()
        );
        token
    }

    fn unsubscribe(&mut self, token: &Subscription<K, P>) -> bool {
        match self.subscriptions.remove(token.event_type()) {
            Some(removed) => {
                self.stats.active_subscriptions =
                    self.stats.active_subscriptions.saturating_sub(removed.len());
                log::trace!(
                    "[EventAggregator] unsubscribed {:?}: {} subscription(s) dropped for {:?}",
                    token.id(),
                    removed.len(),
                    token.event_type()
                );
                true
            }
            None => {
                log::warn!(
                    "[EventAggregator] no subscriptions for {:?}, {:?} already gone",
                    token.event_type(),
                    token.id()
                );
                false
            }
        }
    }

    /// Clones out the subscriptions matching `event_type` so dispatch
    /// can run after the lock is released. Counts the publish and the
    /// attempted deliveries.
    fn snapshot(&mut self, event_type: &K) -> Vec<Subscription<K, P>> {
        self.stats.events_published += 1;
        let tokens = self
            .subscriptions
            .get(event_type)
            .cloned()
            .unwrap_or_default();
        self.stats.events_delivered += tokens.len();
        tokens
    }
}

/// Thread-safe, cloneable handle to the aggregation hub.
///
/// `K` is the event-type key (any derived enum qualifies, see
/// [`EventKey`]); `P` is the payload type messages on this aggregator
/// carry.
pub struct EventAggregator<K, P> {
    inner: Arc<Mutex<Registry<K, P>>>,
}

impl<K: EventKey, P: 'static> EventAggregator<K, P> {
    /// Creates an empty aggregator.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry<K, P>> {
        self.inner.lock().unwrap()
    }

    /// Registers `action` for `event_type` and returns the subscription
    /// token used to revoke it later.
    ///
    /// Every call returns a token with a fresh identity, even for
    /// identical arguments, and any number of subscriptions may coexist
    /// for one key. Dispatch order for a key is registration order.
    pub fn subscribe<F>(&self, event_type: K, action: F) -> Subscription<K, P>
    where
        F: Fn(&Message<K, P>) + Send + Sync + 'static,
    {
        self.lock().subscribe(event_type, Arc::new(action))
    }

    /// Delivers `message` to every subscription registered for its
    /// event type, synchronously and in registration order, on the
    /// calling thread.
    ///
    /// A key with no registrations is a no-op, not an error. A
    /// panicking action propagates to the caller and aborts delivery to
    /// the remaining subscriptions of the pass; actions that need
    /// isolation must catch within themselves. The registry lock is not
    /// held during delivery, so a panic never poisons the registry.
    pub fn publish(&self, message: &Message<K, P>) {
        let tokens = self.lock().snapshot(message.event_type());
        for token in &tokens {
            token.on_action(message);
        }
        log::trace!(
            "[EventAggregator] published {:?} to {} subscription(s)",
            message.event_type(),
            tokens.len()
        );
    }

    /// Revokes the registration behind `token`.
    ///
    /// Policy inherited from the reference design: this drops **every**
    /// subscription registered for the token's event type, not just the
    /// token itself — two independent parties sharing a key evict each
    /// other. Returns `true` if anything was removed; revoking a key
    /// with no registrations is a no-op.
    pub fn unsubscribe(&self, token: &Subscription<K, P>) -> bool {
        self.lock().unsubscribe(token)
    }

    /// Number of currently active subscriptions, across all keys.
    pub fn subscription_count(&self) -> usize {
        self.lock().stats.active_subscriptions
    }

    /// Snapshot of the activity counters.
    pub fn stats(&self) -> AggregatorStats {
        self.lock().stats.clone()
    }
}

impl<K: EventKey, P: 'static> Default for EventAggregator<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> Clone for EventAggregator<K, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
