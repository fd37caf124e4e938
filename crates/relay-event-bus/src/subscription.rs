//! Subscription tokens.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use relay_types::EventKey;

use crate::message::Message;

/// The opaque callable a subscription wraps.
pub(crate) type Action<K, P> = Arc<dyn Fn(&Message<K, P>) + Send + Sync>;

/// Unique identity of one subscription.
///
/// Minted from a process-wide counter, so no two subscribe calls ever
/// return the same id — even for identical arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Immutable pairing of an event-type key and an action.
///
/// Returned by [`EventAggregator::subscribe`](crate::EventAggregator::subscribe)
/// and held by the caller as the handle for later revocation; the
/// aggregator keeps its own clone in the registry until unsubscribed.
/// Clones share the same [`SubscriptionId`] and refer to the same
/// registration. Equality and hashing compare ids only.
pub struct Subscription<K, P> {
    id: SubscriptionId,
    event_type: K,
    action: Action<K, P>,
}

impl<K: EventKey, P: 'static> Subscription<K, P> {
    pub(crate) fn new(event_type: K, action: Action<K, P>) -> Self {
        Self {
            id: SubscriptionId::new(),
            event_type,
            action,
        }
    }

    /// The identity of this registration.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// The key this subscription listens for.
    pub fn event_type(&self) -> &K {
        &self.event_type
    }

    /// Invoked by the aggregator when a message with a matching key is
    /// published; forwards the message to the wrapped action.
    pub fn on_action(&self, message: &Message<K, P>) {
        (self.action)(message);
    }
}

impl<K: Clone, P> Clone for Subscription<K, P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            event_type: self.event_type.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<K, P> PartialEq for Subscription<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<K, P> Eq for Subscription<K, P> {}

impl<K, P> std::hash::Hash for Subscription<K, P> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<K: fmt::Debug, P> fmt::Debug for Subscription<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}
