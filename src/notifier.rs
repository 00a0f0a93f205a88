//! Process-wide notifier
//!
//! Resolves configuration from defaults, the config file and the
//! environment, then registers with every configured Growl daemon the
//! first time a notification is sent.
//!
//! ```no_run
//! use growl_relay::domain::NotificationType;
//!
//! # async fn run() {
//! let report = growl_relay::send_notification(
//!     "Deploy",
//!     "Release 1.4 is live",
//!     NotificationType::ServerStatus,
//!     false,
//! )
//! .await;
//! println!("{}/{}", report.delivered, report.attempted);
//! # }
//! ```

use std::env;

use tokio::sync::OnceCell;
use tracing::warn;

use crate::application::ports::ConfigStore;
use crate::application::{BroadcastReport, GrowlDispatcher};
use crate::domain::config::{split_host_list, RelayConfig};
use crate::domain::notification::{Notification, NotificationType};
use crate::infrastructure::{GntpConnector, XdgConfigStore};

pub const ENV_ENABLED: &str = "GROWL_ENABLED";
pub const ENV_APP_NAME: &str = "GROWL_APP_NAME";
pub const ENV_HOSTS: &str = "GROWL_HOSTS";
pub const ENV_TIMEOUT_SECS: &str = "GROWL_TIMEOUT_SECS";

static NOTIFIER: OnceCell<GrowlDispatcher<GntpConnector>> = OnceCell::const_new();

/// Parse a boolean the way config values are written by hand
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Build a config from environment lookups. Unparsable values are ignored.
pub fn config_from_env<F>(lookup: F) -> RelayConfig
where
    F: Fn(&str) -> Option<String>,
{
    let enabled = lookup(ENV_ENABLED).and_then(|v| {
        let parsed = parse_bool(&v);
        if parsed.is_none() {
            warn!("Ignoring {}={:?}: expected true or false", ENV_ENABLED, v);
        }
        parsed
    });

    let timeout_secs = lookup(ENV_TIMEOUT_SECS).and_then(|v| match v.trim().parse::<u64>() {
        Ok(secs) => Some(secs),
        Err(_) => {
            warn!("Ignoring {}={:?}: expected whole seconds", ENV_TIMEOUT_SECS, v);
            None
        }
    });

    RelayConfig {
        enabled,
        app_name: lookup(ENV_APP_NAME).filter(|s| !s.is_empty()),
        hosts: lookup(ENV_HOSTS).map(|v| split_host_list(&v)),
        timeout_secs,
    }
}

/// Load and merge configuration: defaults < file < env < overrides
pub async fn load_merged_config<S: ConfigStore>(
    store: &S,
    overrides: RelayConfig,
) -> RelayConfig {
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!("Ignoring config file {}: {}", store.path().display(), e);
        RelayConfig::empty()
    });

    let env_config = config_from_env(|key| env::var(key).ok());

    RelayConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(overrides)
}

/// Get the process-wide dispatcher, registering on first use
pub async fn get_notifier() -> &'static GrowlDispatcher<GntpConnector> {
    NOTIFIER
        .get_or_init(|| async {
            let config = load_merged_config(&XdgConfigStore::new(), RelayConfig::empty()).await;
            let connector = GntpConnector::new(config.timeout_or_default());
            GrowlDispatcher::register(&config, &connector).await
        })
        .await
}

/// Broadcast a notification through the process-wide dispatcher
pub async fn send_notification(
    title: &str,
    message: &str,
    note_type: NotificationType,
    sticky: bool,
) -> BroadcastReport {
    let notification = Notification::new(title, message)
        .with_type(note_type)
        .sticky(sticky);
    get_notifier().await.notify(&notification).await
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" Yes "), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert!(parse_bool("maybe").is_none());
    }

    #[test]
    fn empty_env_gives_empty_config() {
        assert_eq!(config_from_env(lookup(&[])), RelayConfig::empty());
    }

    #[test]
    fn env_values_are_parsed() {
        let config = config_from_env(lookup(&[
            (ENV_ENABLED, "false"),
            (ENV_APP_NAME, "Worker"),
            (ENV_HOSTS, "a, b:9000"),
            (ENV_TIMEOUT_SECS, "3"),
        ]));

        assert_eq!(config.enabled, Some(false));
        assert_eq!(config.app_name, Some("Worker".to_string()));
        assert_eq!(
            config.hosts,
            Some(vec!["a".to_string(), "b:9000".to_string()])
        );
        assert_eq!(config.timeout_secs, Some(3));
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let config = config_from_env(lookup(&[
            (ENV_ENABLED, "sometimes"),
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_APP_NAME, ""),
        ]));
        assert_eq!(config, RelayConfig::empty());
    }

    #[test]
    fn empty_host_env_clears_hosts() {
        let config = config_from_env(lookup(&[(ENV_HOSTS, "")]));
        assert_eq!(config.hosts, Some(vec![]));
    }

    #[tokio::test]
    async fn overrides_take_precedence_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        store
            .save(&RelayConfig {
                app_name: Some("From File".to_string()),
                hosts: Some(vec!["file-host".to_string()]),
                ..Default::default()
            })
            .await
            .unwrap();

        let overrides = RelayConfig {
            hosts: Some(vec!["cli-host".to_string()]),
            app_name: Some("From Flag".to_string()),
            enabled: Some(true),
            timeout_secs: Some(1),
        };
        let config = load_merged_config(&store, overrides).await;

        assert_eq!(config.hosts_or_default(), ["cli-host".to_string()]);
        assert_eq!(config.app_name_or_default(), "From Flag");
        assert!(config.enabled_or_default());
        assert_eq!(config.timeout_secs, Some(1));
    }

    #[tokio::test]
    async fn broken_file_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "hosts = [unterminated").unwrap();
        let store = XdgConfigStore::with_path(&path);

        let overrides = RelayConfig {
            enabled: Some(true),
            app_name: Some("x".to_string()),
            hosts: Some(vec![]),
            timeout_secs: Some(5),
        };
        let config = load_merged_config(&store, overrides.clone()).await;

        assert_eq!(config, overrides);
    }
}
