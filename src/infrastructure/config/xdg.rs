//! TOML config file under the user's config directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::domain::config::{RelayConfig, DEFAULT_APP_NAME, DEFAULT_TIMEOUT_SECS};
use crate::domain::endpoint::DEFAULT_GNTP_PORT;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "growl-relay";
const FILE_NAME: &str = "config.toml";

/// Relay config stored as `<config dir>/growl-relay/config.toml`
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Store at the platform config directory, falling back to `~/.config`
    pub fn new() -> Self {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_default();

        Self {
            path: base.join(APP_DIR).join(FILE_NAME),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_toml(content: &str) -> Result<RelayConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn to_toml(config: &RelayConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Annotated starter file; parses to `RelayConfig::defaults()`
    fn template() -> String {
        format!(
            "# growl-relay configuration\n\
             \n\
             # Set to false to turn every notification into a no-op\n\
             enabled = true\n\
             \n\
             # Application name announced to each Growl daemon\n\
             app_name = {app_name}\n\
             \n\
             # Growl daemons as \"host\", \"host:port\" or \"[ipv6]:port\" (default port {port})\n\
             hosts = []\n\
             \n\
             # Seconds allowed for each connect/send/receive\n\
             timeout_secs = {timeout}\n",
            app_name = toml::Value::String(DEFAULT_APP_NAME.to_string()),
            port = DEFAULT_GNTP_PORT,
            timeout = DEFAULT_TIMEOUT_SECS,
        )
    }

    /// Write through a sibling temp file so a crash never leaves a torn config
    async fn write_atomic(&self, content: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let staging = self.path.with_extension("toml.tmp");
        fs::write(&staging, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<RelayConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(RelayConfig::empty()),
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    async fn save(&self, config: &RelayConfig) -> Result<(), ConfigError> {
        let content = Self::to_toml(config)?;
        self.write_atomic(&content).await
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(self.path.display().to_string()));
        }

        self.write_atomic(&Self::template()).await
    }
}
