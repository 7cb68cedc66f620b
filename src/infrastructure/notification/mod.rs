//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust (primary),
//! notify-send as a Linux fallback, and a JSON printer for dry runs.

mod notify_rust;
mod notify_send;
mod stdout;

pub use notify_rust::{NotifyRustService, DEFAULT_SOUND_NAME};
pub use notify_send::NotifySendService;
pub use stdout::StdoutService;

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::application::ports::NotificationService;
use crate::domain::ResourceId;

/// Valid notification backend names
pub const VALID_BACKENDS: &[&str] = &["notify-rust", "notify-send", "stdout"];

/// Freedesktop hints under which notification servers replace an earlier
/// notification carrying the same value
pub const STACK_HINTS: [&str; 2] = ["x-dunst-stack-tag", "x-canonical-private-synchronous"];

/// Replacement key of a post. Tagged posts are keyed by tag alone, untagged
/// posts by id.
pub fn stack_key(tag: Option<&str>, id: i32) -> String {
    match tag {
        Some(tag) => tag.to_string(),
        None => format!("id:{}", id),
    }
}

/// Available notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationBackend {
    #[default]
    NotifyRust,
    NotifySend,
    Stdout,
}

impl NotificationBackend {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotifyRust => "notify-rust",
            Self::NotifySend => "notify-send",
            Self::Stdout => "stdout",
        }
    }
}

impl FromStr for NotificationBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notify-rust" => Ok(Self::NotifyRust),
            "notify-send" => Ok(Self::NotifySend),
            "stdout" => Ok(Self::Stdout),
            _ => Err(format!(
                "Invalid backend '{}'. Valid options: {}",
                s,
                VALID_BACKENDS.join(", ")
            )),
        }
    }
}

impl fmt::Display for NotificationBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create the notification service for a backend
pub fn create_service(
    backend: NotificationBackend,
    app_name: &str,
    icons: HashMap<ResourceId, PathBuf>,
) -> Box<dyn NotificationService> {
    match backend {
        NotificationBackend::NotifyRust => {
            Box::new(NotifyRustService::new(app_name).with_icons(icons))
        }
        NotificationBackend::NotifySend => {
            Box::new(NotifySendService::new(app_name).with_icons(icons))
        }
        NotificationBackend::Stdout => Box::new(StdoutService::new()),
    }
}
