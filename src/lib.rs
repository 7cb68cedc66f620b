//! Push Tray - render push messages as system tray notifications
//!
//! Applications that handle push messages themselves while in the
//! foreground lose the notification the platform would otherwise draw.
//! This crate rebuilds that notification from the message, resolving
//! every field with the same fallbacks the platform applies, and posts it.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Message and notification value objects, and errors
//! - **Application**: The mapper and notifier, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (resource manifest, notify-rust, notify-send)
//! - **CLI**: Command-line host that posts a message from a JSON file
//!
//! # Example
//!
//! ```no_run
//! use push_tray::application::RemoteMessageNotifier;
//! use push_tray::domain::InboundMessage;
//! use push_tray::infrastructure::{ManifestResources, NotifyRustService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let resources = ManifestResources::load("app.toml").await?;
//! let service = NotifyRustService::new(resources.display_name());
//! let message = InboundMessage::from_json(r#"{"notification": {"body": "Hi"}}"#)?;
//!
//! RemoteMessageNotifier::new(resources, service).notify(&message)?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
