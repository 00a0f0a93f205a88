//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{split_host_list, RelayConfig};
use crate::domain::endpoint::HostSpec;
use crate::domain::error::ConfigError;
use crate::notifier::parse_bool;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
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
    ensure_valid_key(key)?;

    let mut config = store.load().await?;
    apply_config_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    let value = config_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
    presenter.output(&value);

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

fn validation_error(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Validate a value and store it under `key`
fn apply_config_value(config: &mut RelayConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "enabled" => {
            let enabled = parse_bool(value)
                .ok_or_else(|| validation_error(key, "Value must be 'true' or 'false'"))?;
            config.enabled = Some(enabled);
        }
        "app_name" => {
            let name = value.trim();
            if name.is_empty() {
                return Err(validation_error(key, "Value must not be empty"));
            }
            config.app_name = Some(name.to_string());
        }
        "hosts" => {
            let hosts = split_host_list(value);
            for host in &hosts {
                host.parse::<HostSpec>()
                    .map_err(|e| validation_error(key, e.to_string()))?;
            }
            config.hosts = Some(hosts);
        }
        "timeout_secs" => {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    validation_error(key, "Value must be a positive whole number of seconds")
                })?;
            config.timeout_secs = Some(secs);
        }
        _ => return Err(validation_error(key, "Unknown key")),
    }
    Ok(())
}

/// Render a stored value, or None when unset
fn config_value(config: &RelayConfig, key: &str) -> Option<String> {
    match key {
        "enabled" => config.enabled.map(|b| b.to_string()),
        "app_name" => config.app_name.clone(),
        "hosts" => config.hosts.as_ref().map(|hosts| hosts.join(",")),
        "timeout_secs" => config.timeout_secs.map(|s| s.to_string()),
        _ => None,
    }
}
