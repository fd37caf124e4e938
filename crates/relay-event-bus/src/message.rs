//! The envelope publishers hand to the aggregator.

/// Immutable pairing of an event-type key and a typed payload.
///
/// A `Message` is built per publish call and owned by that call's
/// stack; the aggregator passes it to matching actions by reference and
/// retains nothing after the dispatch pass. Messages of one event type
/// are free to carry different payload types across different
/// aggregators — the payload type is fixed per aggregator, not per key.
#[derive(Debug, Clone)]
pub struct Message<K, P> {
    event_type: K,
    content: P,
}

impl<K, P> Message<K, P> {
    /// Creates a message for `event_type` carrying `content`.
    pub fn new(event_type: K, content: P) -> Self {
        Self {
            event_type,
            content,
        }
    }

    /// The key subscribers matched on.
    pub fn event_type(&self) -> &K {
        &self.event_type
    }

    /// The payload.
    pub fn content(&self) -> &P {
        &self.content
    }

    /// Consumes the envelope and returns the payload.
    pub fn into_content(self) -> P {
        self.content
    }
}
