//! Runners for the message commands

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tokio::io::AsyncReadExt;

use crate::application::ports::ConfigStore;
use crate::application::{NotifyError, RemoteMessageMapper, RemoteMessageNotifier};
use crate::domain::config::AppConfig;
use crate::domain::InboundMessage;
use crate::infrastructure::{create_service, ManifestResources, XdgConfigStore};

use super::args::{MapOptions, NotifyOptions};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the manifest path
pub const ENV_MANIFEST: &str = "PUSH_TRAY_MANIFEST";
/// Environment variable overriding the backend
pub const ENV_BACKEND: &str = "PUSH_TRAY_BACKEND";
/// Environment variable overriding the log level
pub const ENV_LOG: &str = "PUSH_TRAY_LOG";

/// Map a message and post it through the configured backend
pub async fn run_notify(options: NotifyOptions) -> ExitCode {
    let presenter = Presenter::new();

    let (message, resources) = match load_inputs(&options.source, &options.manifest).await {
        Ok(inputs) => inputs,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let service = create_service(
        options.backend,
        &resources.display_name(),
        resources.icon_paths(),
    );
    log::debug!("Posting through {} backend", options.backend);

    let notifier = RemoteMessageNotifier::new(resources, service);
    match notifier.notify(&message) {
        Ok(target) => {
            presenter.posted(&target);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e @ NotifyError::InvalidArgument(_)) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_USAGE_ERROR)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Map a message and print the notification as JSON
pub async fn run_map(options: MapOptions) -> ExitCode {
    let presenter = Presenter::new();

    let (message, resources) = match load_inputs(&options.source, &options.manifest).await {
        Ok(inputs) => inputs,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let notification = match RemoteMessageMapper::new(resources).map(&message) {
        Ok(notification) => notification,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    match serde_json::to_string_pretty(&notification) {
        Ok(json) => {
            presenter.output(&json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("Failed to serialize notification: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

async fn load_inputs(
    source: &str,
    manifest: &Path,
) -> Result<(InboundMessage, ManifestResources), String> {
    let message = read_message(source).await?;
    let resources = ManifestResources::load(manifest)
        .await
        .map_err(|e| e.to_string())?;
    Ok((message, resources))
}

/// Read a message payload from a file, or stdin when the source is "-"
pub async fn read_message(source: &str) -> Result<InboundMessage, String> {
    let json = if source == "-" {
        let mut json = String::new();
        tokio::io::stdin()
            .read_to_string(&mut json)
            .await
            .map_err(|e| format!("Failed to read message from stdin: {}", e))?;
        json
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| format!("Failed to read message {}: {}", source, e))?
    };

    InboundMessage::from_json(&json).map_err(|e| e.to_string())
}

/// Resolve the manifest path: configured path, else the default beside the config file
pub fn manifest_path(config: &AppConfig, store: &XdgConfigStore) -> PathBuf {
    config
        .manifest
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| store.default_manifest_path())
}

/// Install the logger. `RUST_LOG` wins over the configured level.
pub fn init_logging(config: &AppConfig) {
    let env = env_logger::Env::default().default_filter_or(config.log_level_or_default());
    // A second init (tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(store: &XdgConfigStore, cli_config: AppConfig) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            Presenter::new().warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        manifest: env::var(ENV_MANIFEST).ok().filter(|s| !s.is_empty()),
        backend: env::var(ENV_BACKEND).ok().filter(|s| !s.is_empty()),
        log_level: env::var(ENV_LOG).ok().filter(|s| !s.is_empty()),
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
