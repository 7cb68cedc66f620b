//! Application layer - Use cases and port interfaces
//!
//! Contains the message-to-notification mapping, the notifier that posts
//! the result, and the trait definitions for the systems they talk to.

pub mod mapper;
pub mod notifier;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export use cases
pub use mapper::{
    RemoteMessageMapper, DEFAULT_COLOR_METADATA, DEFAULT_ICON_METADATA, DEFAULT_SOUND,
};
pub use notifier::{NotifyError, PostTarget, RemoteMessageNotifier};
