//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Notification backend used when none is configured
pub const DEFAULT_BACKEND: &str = "notify-rust";

/// Log filter used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the resource manifest describing the application
    pub manifest: Option<String>,
    /// Notification backend: notify-rust, notify-send or stdout
    pub backend: Option<String>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            manifest: None,
            backend: Some(DEFAULT_BACKEND.to_string()),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            manifest: other.manifest.or(self.manifest),
            backend: other.backend.or(self.backend),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Get backend name, or the default backend if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or(DEFAULT_BACKEND)
    }

    /// Get log filter, or the default level if not set
    pub fn log_level_or_default(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
