//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::infrastructure::notification::NotificationBackend;

/// Valid configuration keys
pub const VALID_CONFIG_KEYS: &[&str] = &["manifest", "backend", "log_level"];

/// Valid log filter levels
pub const VALID_LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Push Tray - show push messages as system tray notifications
#[derive(Parser, Debug)]
#[command(name = "push-tray")]
#[command(version)]
#[command(about = "Show push messages as system tray notifications, the way the platform does in background")]
#[command(long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post a message as a system tray notification
    Notify {
        #[command(flatten)]
        message: MessageArgs,

        /// Notification backend
        #[arg(short = 'b', long, value_name = "BACKEND")]
        backend: Option<BackendArg>,

        /// Print the notification as JSON instead of posting it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the notification a message maps to, as JSON
    Map {
        #[command(flatten)]
        message: MessageArgs,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments shared by commands that read a message
#[derive(Args, Debug, Clone)]
pub struct MessageArgs {
    /// Message payload as a JSON file, or '-' for stdin
    #[arg(value_name = "MESSAGE")]
    pub source: String,

    /// Application resource manifest (TOML)
    #[arg(short = 'm', long, value_name = "PATH")]
    pub manifest: Option<String>,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    NotifyRust,
    NotifySend,
    Stdout,
}

impl From<BackendArg> for NotificationBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::NotifyRust => NotificationBackend::NotifyRust,
            BackendArg::NotifySend => NotificationBackend::NotifySend,
            BackendArg::Stdout => NotificationBackend::Stdout,
        }
    }
}

/// Parsed options for posting a message
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub source: String,
    pub manifest: PathBuf,
    pub backend: NotificationBackend,
}

/// Parsed options for mapping a message
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub source: String,
    pub manifest: PathBuf,
}

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
