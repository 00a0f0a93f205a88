//! Configuration domain module

mod relay_config;

pub use relay_config::{split_host_list, RelayConfig, DEFAULT_APP_NAME, DEFAULT_TIMEOUT_SECS};
