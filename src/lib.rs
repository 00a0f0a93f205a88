//! Growl Relay - broadcast notifications to Growl daemons
//!
//! Registers an application with one or more remote Growl daemons over GNTP
//! and fans every notification out to all of them. Delivery is best-effort:
//! a host that cannot be reached is logged and skipped, never reported as an
//! error to the caller.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Host specs, endpoints, notifications, configuration and errors
//! - **Application**: The registration/broadcast use case and port traits
//! - **Infrastructure**: GNTP client and XDG config store adapters
//! - **Notifier**: Config resolution and the lazily-initialized process-wide dispatcher
//! - **CLI**: Command-line interface and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod notifier;

pub use notifier::{get_notifier, send_notification};
