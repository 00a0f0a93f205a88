//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::config::RelayConfig;
use crate::domain::notification::NotificationType;

/// Growl Relay - broadcast notifications to Growl daemons
#[derive(Parser, Debug)]
#[command(name = "growl-relay")]
#[command(version)]
#[command(about = "Broadcast notifications to one or more Growl daemons over GNTP")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a notification to every configured host
    Send {
        /// Notification title
        title: String,
        /// Notification body
        message: String,
        /// Notification type
        #[arg(short = 't', long, value_enum, default_value_t = NoteTypeArg::Info)]
        note_type: NoteTypeArg,
        /// Keep the notification on screen until dismissed
        #[arg(short = 's', long)]
        sticky: bool,
        /// Print the delivery report as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Register with every configured host and report which succeeded
    Register {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Per-invocation overrides for the configured hosts
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Growl host as HOST or HOST:PORT (repeatable, replaces configured hosts)
    #[arg(short = 'H', long = "host", value_name = "HOST")]
    pub hosts: Vec<String>,

    /// Application name announced to the daemons
    #[arg(short = 'a', long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Network timeout per host, in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl TargetArgs {
    /// Config layer holding only what was given on the command line
    pub fn to_overrides(&self) -> RelayConfig {
        RelayConfig {
            enabled: None,
            app_name: self.app_name.clone(),
            hosts: if self.hosts.is_empty() {
                None
            } else {
                Some(self.hosts.clone())
            },
            timeout_secs: self.timeout,
        }
    }
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

/// Notification type argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum NoteTypeArg {
    Info,
    Error,
    ServerStatus,
}

impl From<NoteTypeArg> for NotificationType {
    fn from(arg: NoteTypeArg) -> Self {
        match arg {
            NoteTypeArg::Info => NotificationType::Info,
            NoteTypeArg::Error => NotificationType::Error,
            NoteTypeArg::ServerStatus => NotificationType::ServerStatus,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["enabled", "app_name", "hosts", "timeout_secs"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_send_defaults() {
        let cli = Cli::parse_from(["growl-relay", "send", "Title", "Body"]);
        let Commands::Send {
            title,
            message,
            note_type,
            sticky,
            json,
            target,
        } = cli.command
        else {
            panic!("Expected Send command");
        };
        assert_eq!(title, "Title");
        assert_eq!(message, "Body");
        assert_eq!(note_type, NoteTypeArg::Info);
        assert!(!sticky);
        assert!(!json);
        assert!(target.hosts.is_empty());
        assert_eq!(target.to_overrides(), RelayConfig::empty());
    }

    #[test]
    fn cli_parses_send_options() {
        let cli = Cli::parse_from([
            "growl-relay",
            "send",
            "Build",
            "failed",
            "-t",
            "server-status",
            "--sticky",
            "-H",
            "alpha",
            "--host",
            "beta:9000",
            "-a",
            "CI",
            "--timeout",
            "2",
        ]);
        let Commands::Send {
            note_type,
            sticky,
            target,
            ..
        } = cli.command
        else {
            panic!("Expected Send command");
        };
        assert_eq!(note_type, NoteTypeArg::ServerStatus);
        assert!(sticky);

        let overrides = target.to_overrides();
        assert_eq!(
            overrides.hosts,
            Some(vec!["alpha".to_string(), "beta:9000".to_string()])
        );
        assert_eq!(overrides.app_name, Some("CI".to_string()));
        assert_eq!(overrides.timeout_secs, Some(2));
        assert!(overrides.enabled.is_none());
    }

    #[test]
    fn cli_parses_register() {
        let cli = Cli::parse_from(["growl-relay", "register", "-H", "localhost"]);
        assert!(matches!(cli.command, Commands::Register { ref target } if target.hosts == ["localhost"]));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["growl-relay", "config", "set", "hosts", "a,b:1"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "hosts");
            assert_eq!(value, "a,b:1");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn cli_rejects_unknown_note_type() {
        assert!(Cli::try_parse_from(["growl-relay", "send", "a", "b", "-t", "warning"]).is_err());
    }

    #[test]
    fn note_type_arg_converts() {
        assert_eq!(
            NotificationType::from(NoteTypeArg::ServerStatus),
            NotificationType::ServerStatus
        );
        assert_eq!(NotificationType::from(NoteTypeArg::Error), NotificationType::Error);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("hosts"));
        assert!(is_valid_config_key("app_name"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
