//! Domain layer - Core value objects
//!
//! Contains the inbound message, the notification descriptor it maps to,
//! and the value types and errors both are built from.
//! This layer has no dependencies on external systems.

pub mod color;
pub mod config;
pub mod error;
pub mod localization;
pub mod message;
pub mod notification;
pub mod resource;

// Re-export common types
pub use color::Color;
pub use config::AppConfig;
pub use error::*;
pub use message::{string_hash, InboundMessage, MessageNotification};
pub use notification::{
    Intent, NotificationBuilder, NotificationDescriptor, NotificationSound, PendingIntent,
};
pub use resource::{ResourceId, ResourceKind};
