//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like Growl daemons and the config file.

pub mod config;
pub mod gntp;

// Re-export adapters
pub use config::XdgConfigStore;
pub use gntp::{GntpClient, GntpConnector};
