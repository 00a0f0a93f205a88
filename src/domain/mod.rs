//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::RelayConfig;
pub use endpoint::{Endpoint, HostSpec, DEFAULT_GNTP_PORT};
pub use error::*;
pub use notification::{Notification, NotificationType};
