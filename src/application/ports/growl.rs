//! Growl daemon port interface

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::endpoint::HostSpec;
use crate::domain::error::HostSpecParseError;
use crate::domain::notification::{Notification, NotificationType, ALL_NOTIFICATION_TYPES};

/// Errors talking to a single Growl daemon
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrowlError {
    #[error("{0}")]
    Parse(#[from] HostSpecParseError),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Daemon rejected request ({code}): {description}")]
    Protocol { code: String, description: String },
}

/// What an application announces during the registration handshake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub app_name: String,
    pub notifications: Vec<NotificationType>,
    pub enabled: Vec<NotificationType>,
}

impl Registration {
    /// Register every notification type, all enabled by default
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            notifications: ALL_NOTIFICATION_TYPES.to_vec(),
            enabled: ALL_NOTIFICATION_TYPES.to_vec(),
        }
    }

    pub fn is_enabled(&self, note_type: NotificationType) -> bool {
        self.enabled.contains(&note_type)
    }
}

/// Port for one remote Growl daemon.
///
/// Implementations open a fresh connection per call.
#[async_trait]
pub trait GrowlClient: Send + Sync {
    /// Perform the registration handshake.
    async fn register(&self) -> Result<(), GrowlError>;

    /// Deliver a notification to the daemon.
    async fn notify(&self, notification: &Notification) -> Result<(), GrowlError>;
}

/// Builds clients bound to a host and application registration
pub trait GrowlConnector: Send + Sync {
    type Client: GrowlClient;

    /// Create a client for the given daemon. Does not touch the network.
    fn client(&self, host: &HostSpec, registration: &Registration) -> Self::Client;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_enables_all_types() {
        let registration = Registration::new("App");
        assert_eq!(registration.notifications.len(), 3);
        assert!(registration.is_enabled(NotificationType::Info));
        assert!(registration.is_enabled(NotificationType::Error));
        assert!(registration.is_enabled(NotificationType::ServerStatus));
    }

    #[test]
    fn parse_error_converts() {
        let err: GrowlError = HostSpecParseError::InvalidPort {
            input: "h:x".to_string(),
        }
        .into();
        assert!(matches!(err, GrowlError::Parse(_)));
        assert!(err.to_string().contains("h:x"));
    }
}
