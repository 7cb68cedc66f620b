//! Push Tray CLI entry point

use std::process::ExitCode;

use clap::Parser;

use push_tray::cli::{
    app::{init_logging, load_merged_config, manifest_path, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    run_map, run_notify, MapOptions, NotifyOptions,
};
use push_tray::domain::config::AppConfig;
use push_tray::domain::error::ConfigError;
use push_tray::infrastructure::{NotificationBackend, XdgConfigStore};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();
    let store = XdgConfigStore::new();

    // Build CLI config from args
    let mut cli_config = AppConfig {
        log_level: cli.verbose.then(|| "debug".to_string()),
        ..Default::default()
    };

    match cli.command {
        Commands::Config { action } => {
            match handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e @ ConfigError::ValidationError { .. }) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_USAGE_ERROR)
                }
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(EXIT_ERROR)
                }
            }
        }
        Commands::Notify {
            message,
            backend,
            dry_run,
        } => {
            cli_config.manifest = message.manifest;
            cli_config.backend = backend
                .map(|b| NotificationBackend::from(b).as_str().to_string());

            let config = load_merged_config(&store, cli_config).await;
            init_logging(&config);

            let backend = match config.backend_or_default().parse::<NotificationBackend>() {
                Ok(_) if dry_run => NotificationBackend::Stdout,
                Ok(backend) => backend,
                Err(e) => {
                    presenter.error(&e);
                    return ExitCode::from(EXIT_USAGE_ERROR);
                }
            };
            if dry_run {
                presenter.info("Dry run: printing the notification instead of posting it");
            }

            let options = NotifyOptions {
                source: message.source,
                manifest: manifest_path(&config, &store),
                backend,
            };
            run_notify(options).await
        }
        Commands::Map { message } => {
            cli_config.manifest = message.manifest;

            let config = load_merged_config(&store, cli_config).await;
            init_logging(&config);

            let options = MapOptions {
                source: message.source,
                manifest: manifest_path(&config, &store),
            };
            run_map(options).await
        }
    }
}
