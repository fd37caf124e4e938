//! In-process event aggregation.
//!
//! A single [`EventAggregator`] mediates between independent publishers
//! and subscribers: publishers hand it a [`Message`] keyed by an event
//! type, and it synchronously invokes every action registered for that
//! key, in registration order, on the publishing thread. Neither side
//! ever references the other.
//!
//! The aggregator handle is cheap to clone (`Arc` inside); construct it
//! once at startup and pass clones to every [`Publisher`] and
//! [`Subscriber`]. There is no global instance — callers that want a
//! process-wide hub can park a clone in a `std::sync::OnceLock`.
//!
//! ```
//! use relay_event_bus::{EventAggregator, Message, Publisher};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Event {
//!     ItemSold,
//! }
//!
//! let aggregator: EventAggregator<Event, String> = EventAggregator::new();
//! let token = aggregator.subscribe(Event::ItemSold, |msg: &Message<Event, String>| {
//!     println!("sold: {}", msg.content());
//! });
//!
//! let publisher = Publisher::new(aggregator.clone());
//! publisher.publish_content(Event::ItemSold, "umbrella".to_string());
//!
//! aggregator.unsubscribe(&token);
//! ```

pub mod core;
pub mod message;
pub mod publisher;
pub mod subscriber;
pub mod subscription;

pub use crate::core::{AggregatorStats, EventAggregator};
pub use message::Message;
pub use publisher::Publisher;
pub use subscriber::Subscriber;
pub use subscription::{Subscription, SubscriptionId};

// Re-export the shared vocabulary for convenience
pub use relay_types::{EventKey, SubscribeError};
