//! GNTP infrastructure module
//!
//! Talks to Growl daemons using the Growl Notification Transport Protocol.

mod client;
pub mod message;

pub use client::{GntpClient, GntpConnector};
