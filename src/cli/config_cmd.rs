//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::infrastructure::notification::NotificationBackend;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS, VALID_LOG_LEVELS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "manifest" => config.manifest = Some(value.to_string()),
        "backend" => config.backend = Some(value.to_lowercase()),
        "log_level" => config.log_level = Some(value.to_lowercase()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "manifest" => config.manifest,
        "backend" => config.backend,
        "log_level" => config.log_level,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value("manifest", config.manifest.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("backend", config.backend.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("log_level", config.log_level.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "backend" => {
            value
                .parse::<NotificationBackend>()
                .map_err(|message| ConfigError::ValidationError {
                    key: key.to_string(),
                    message,
                })?;
        }
        "log_level" => {
            let lower = value.to_lowercase();
            if !VALID_LOG_LEVELS.contains(&lower.as_str()) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_LOG_LEVELS.join(", ")
                    ),
                });
            }
        }
        "manifest" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Path must not be empty".to_string(),
                });
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[test]
    fn validate_backend() {
        assert!(validate_config_value("backend", "notify-rust").is_ok());
        assert!(validate_config_value("backend", "stdout").is_ok());
        assert!(validate_config_value("backend", "growl").is_err());
    }

    #[test]
    fn validate_log_level() {
        assert!(validate_config_value("log_level", "debug").is_ok());
        assert!(validate_config_value("log_level", "WARN").is_ok());
        assert!(validate_config_value("log_level", "loud").is_err());
    }

    #[test]
    fn validate_manifest_not_empty() {
        assert!(validate_config_value("manifest", "/opt/app/app.toml").is_ok());
        assert!(validate_config_value("manifest", "  ").is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = check_key("api_key").unwrap_err();
        assert!(err.to_string().contains("Valid keys"));
    }

    #[tokio::test]
    async fn set_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "backend", "Notify-Send")
            .await
            .unwrap();
        handle_set(&store, &presenter, "manifest", "/opt/app/app.toml")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.backend.as_deref(), Some("notify-send"));
        assert_eq!(config.manifest.as_deref(), Some("/opt/app/app.toml"));
    }

    #[tokio::test]
    async fn set_invalid_value_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));

        let result = handle_set(&store, &Presenter::new(), "log_level", "loud").await;
        assert!(result.is_err());
        assert!(!store.exists());
    }
}
