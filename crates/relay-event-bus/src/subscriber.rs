//! Subscribing facade.

use std::collections::HashMap;

use relay_types::{EventKey, SubscribeError};

use crate::core::EventAggregator;
use crate::message::Message;
use crate::subscription::Subscription;

/// Subscribing helper that tracks its own registrations.
///
/// A `Subscriber` may be interested in any number of distinct event
/// types, with one action per type; it keeps the token the aggregator
/// returned for each so it can revoke them individually or all at once
/// via [`dispose`](Self::dispose). The one-action-per-type rule is
/// enforced here, by the facade — the aggregator itself happily holds
/// many subscriptions per key.
pub struct Subscriber<K, P> {
    aggregator: EventAggregator<K, P>,
    tokens: HashMap<K, Subscription<K, P>>,
}

impl<K: EventKey, P: 'static> Subscriber<K, P> {
    /// Creates a subscriber bound to `aggregator`, with no
    /// registrations.
    pub fn new(aggregator: EventAggregator<K, P>) -> Self {
        Self {
            aggregator,
            tokens: HashMap::new(),
        }
    }

    /// Registers `action` for `event_type` and records the returned
    /// token.
    ///
    /// Fails with [`SubscribeError::DuplicateRegistration`] if this
    /// subscriber already holds a live registration for `event_type`;
    /// the existing one stays untouched and must be unsubscribed before
    /// a replacement is accepted.
    pub fn subscribe<F>(&mut self, event_type: K, action: F) -> Result<(), SubscribeError>
    where
        F: Fn(&Message<K, P>) + Send + Sync + 'static,
    {
        if self.tokens.contains_key(&event_type) {
            return Err(SubscribeError::duplicate(&event_type));
        }
        let token = self.aggregator.subscribe(event_type.clone(), action);
        self.tokens.insert(event_type, token);
        Ok(())
    }

    /// Revokes this subscriber's registration for `event_type`, if any.
    ///
    /// No-op when nothing is recorded for the key. Note the
    /// aggregator-side policy: revocation clears the *whole* key, see
    /// [`EventAggregator::unsubscribe`].
    pub fn unsubscribe(&mut self, event_type: &K) {
        if let Some(token) = self.tokens.remove(event_type) {
            self.aggregator.unsubscribe(&token);
        }
    }

    /// Revokes every recorded registration and clears the local index.
    /// Terminal teardown; calling it again is a no-op.
    pub fn dispose(&mut self) {
        for (_, token) in self.tokens.drain() {
            self.aggregator.unsubscribe(&token);
        }
    }

    /// Whether this subscriber holds a registration for `event_type`.
    pub fn is_subscribed(&self, event_type: &K) -> bool {
        self.tokens.contains_key(event_type)
    }

    /// Number of registrations this subscriber currently holds.
    pub fn subscription_count(&self) -> usize {
        self.tokens.len()
    }

    /// The tokens this subscriber currently holds.
    pub fn subscriptions(&self) -> impl Iterator<Item = &Subscription<K, P>> {
        self.tokens.values()
    }
}
