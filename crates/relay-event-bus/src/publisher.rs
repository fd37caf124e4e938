//! Publishing facade.

use relay_types::EventKey;

use crate::core::EventAggregator;
use crate::message::Message;

/// Thin publishing helper over a shared [`EventAggregator`] handle.
///
/// Carries no state of its own; it exists so publishing code can build
/// messages in one call and never touches the registry directly.
pub struct Publisher<K, P> {
    aggregator: EventAggregator<K, P>,
}

impl<K: EventKey, P: 'static> Publisher<K, P> {
    /// Creates a publisher bound to `aggregator`.
    pub fn new(aggregator: EventAggregator<K, P>) -> Self {
        Self { aggregator }
    }

    /// Forwards `message` verbatim to the aggregator.
    pub fn publish(&self, message: Message<K, P>) {
        self.aggregator.publish(&message);
    }

    /// Wraps `content` into a [`Message`] for `event_type` and
    /// publishes it.
    pub fn publish_content(&self, event_type: K, content: P) {
        self.publish(Message::new(event_type, content));
    }
}

impl<K, P> Clone for Publisher<K, P> {
    fn clone(&self) -> Self {
        Self {
            aggregator: self.aggregator.clone(),
        }
    }
}
