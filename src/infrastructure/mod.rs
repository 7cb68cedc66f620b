//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: the
//! manifest-backed resource resolver, desktop notification services,
//! and configuration storage.

pub mod config;
pub mod notification;
pub mod resources;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{
    create_service, NotificationBackend, NotifyRustService, NotifySendService, StdoutService,
};
pub use resources::ManifestResources;
