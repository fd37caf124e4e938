//! The event-key vocabulary shared by publishers and subscribers.
//!
//! Both sides of the bus agree on *which* event happened by comparing
//! keys for equality; keys never carry payload. Callers are expected to
//! draw their keys from one well-known enumeration per domain so that
//! independent publishers and subscribers agree on identity without
//! referencing each other's types:
//!
//! ```
//! use relay_types::EventKey;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum StockEvent {
//!     PriceChanged,
//!     VolumeSpike,
//! }
//!
//! fn assert_key<K: EventKey>() {}
//! assert_key::<StockEvent>();
//! ```

use std::fmt::Debug;
use std::hash::Hash;

/// Bound alias for types usable as event keys.
///
/// Blanket-implemented: any `Eq + Hash + Clone + Debug + Send + Sync`
/// type qualifies, so a plain derived enum is enough.
pub trait EventKey: Eq + Hash + Clone + Debug + Send + Sync + 'static {}

impl<K> EventKey for K where K: Eq + Hash + Clone + Debug + Send + Sync + 'static {}
