//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the runners
//! behind each subcommand.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run_map, run_notify, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, MapOptions, MessageArgs, NotifyOptions};
pub use presenter::Presenter;
