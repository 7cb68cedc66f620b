//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod notification_service;
pub mod resources;

// Re-export common types
pub use config::ConfigStore;
pub use notification_service::{NotificationService, NotificationServiceError};
pub use resources::{ApplicationLabel, ResourceError, ResourceResolver, RESOURCE_URI_SCHEME};
