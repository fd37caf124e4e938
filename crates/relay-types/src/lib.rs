pub mod error;
pub mod key;

pub use error::SubscribeError;
pub use key::EventKey;
