//! Error taxonomy for the event bus.
//!
//! The bus itself is infallible by construction: every argument is an
//! owned, non-optional value, and a registry lookup that finds nothing
//! is a no-op rather than an error. What remains is the subscriber
//! facade's one rejectable request.

use thiserror::Error;

/// Errors returned by the subscriber facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    /// The facade already holds an active registration for this event
    /// type; the existing registration is left untouched. Unsubscribe
    /// first, then register the new action.
    #[error("an action is already registered for event type `{event_type}`")]
    DuplicateRegistration {
        /// Debug rendering of the offending key.
        event_type: String,
    },
}

impl SubscribeError {
    /// Builds a `DuplicateRegistration` from any debuggable key.
    pub fn duplicate(event_type: impl std::fmt::Debug) -> Self {
        Self::DuplicateRegistration {
            event_type: format!("{event_type:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_mentions_the_key() {
        let err = SubscribeError::duplicate("PriceChanged");
        assert_eq!(
            err.to_string(),
            "an action is already registered for event type `\"PriceChanged\"`"
        );
    }
}
