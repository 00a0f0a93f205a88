//! Relay configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::endpoint::HostSpec;
use crate::domain::error::HostSpecParseError;

/// Default application name announced to the daemons
pub const DEFAULT_APP_NAME: &str = "Growl Relay";

/// Default per-endpoint network timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Relay configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub enabled: Option<bool>,
    pub app_name: Option<String>,
    pub hosts: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
}

impl RelayConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            enabled: Some(true),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            hosts: Some(Vec::new()),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
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
            enabled: other.enabled.or(self.enabled),
            app_name: other.app_name.or(self.app_name),
            hosts: other.hosts.or(self.hosts),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Get enabled flag, or true if not set
    pub fn enabled_or_default(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Get application name, or the default name if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get configured host strings, or an empty slice if not set
    pub fn hosts_or_default(&self) -> &[String] {
        self.hosts.as_deref().unwrap_or(&[])
    }

    /// Get the network timeout, or the default if not set or zero
    pub fn timeout_or_default(&self) -> Duration {
        let secs = self
            .timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Parse every configured host, keeping failures alongside their input.
    pub fn host_specs(&self) -> Vec<(String, Result<HostSpec, HostSpecParseError>)> {
        self.hosts_or_default()
            .iter()
            .map(|raw| (raw.clone(), raw.parse()))
            .collect()
    }
}

/// Split a comma-separated host list, dropping blank entries
pub fn split_host_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = RelayConfig::defaults();
        assert_eq!(config.enabled, Some(true));
        assert_eq!(config.app_name, Some("Growl Relay".to_string()));
        assert_eq!(config.hosts, Some(vec![]));
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn empty_has_all_none() {
        let config = RelayConfig::empty();
        assert!(config.enabled.is_none());
        assert!(config.app_name.is_none());
        assert!(config.hosts.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = RelayConfig::empty();
        assert!(config.enabled_or_default());
        assert_eq!(config.app_name_or_default(), DEFAULT_APP_NAME);
        assert!(config.hosts_or_default().is_empty());
        assert_eq!(config.timeout_or_default(), Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_uses_default() {
        let config = RelayConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.timeout_or_default(), Duration::from_secs(5));
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = RelayConfig {
            enabled: Some(true),
            app_name: Some("Base".to_string()),
            hosts: Some(vec!["a".to_string()]),
            ..Default::default()
        };
        let other = RelayConfig {
            enabled: Some(false),
            hosts: Some(vec!["b:1".to_string()]),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.enabled, Some(false));
        assert_eq!(merged.app_name, Some("Base".to_string()));
        assert_eq!(merged.hosts, Some(vec!["b:1".to_string()]));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = RelayConfig {
            timeout_secs: Some(9),
            ..Default::default()
        };
        let merged = base.merge(RelayConfig::empty());
        assert_eq!(merged.timeout_secs, Some(9));
    }

    #[test]
    fn host_specs_keep_order_and_failures() {
        let config = RelayConfig {
            hosts: Some(vec![
                "one".to_string(),
                "two:nope".to_string(),
                "three:4000".to_string(),
            ]),
            ..Default::default()
        };

        let specs = config.host_specs();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].0, "one");
        assert!(specs[0].1.is_ok());
        assert!(specs[1].1.is_err());
        assert_eq!(specs[2].1.as_ref().unwrap().port(), 4000);
    }

    #[test]
    fn split_host_list_trims_and_drops_blanks() {
        assert_eq!(
            split_host_list(" a:1, b ,,c "),
            vec!["a:1".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(split_host_list("").is_empty());
    }
}
