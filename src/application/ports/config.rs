//! Config storage port

use async_trait::async_trait;
use std::path::Path;

use crate::domain::config::RelayConfig;
use crate::domain::error::ConfigError;

/// Persistent home of the user's relay config
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Stored config. A missing file is an empty config, not an error.
    async fn load(&self) -> Result<RelayConfig, ConfigError>;

    async fn save(&self, config: &RelayConfig) -> Result<(), ConfigError>;

    fn path(&self) -> &Path;

    fn exists(&self) -> bool;

    /// Write a starter file holding the defaults. Fails if one already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
