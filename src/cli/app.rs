//! App runners for the send and register commands

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::application::GrowlDispatcher;
use crate::domain::config::RelayConfig;
use crate::domain::notification::Notification;
use crate::infrastructure::{GntpConnector, XdgConfigStore};
use crate::notifier::load_merged_config;

use super::args::TargetArgs;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "growl_relay=info";

/// Install the tracing subscriber. Logs go to stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve config and explain why nothing will be sent, if that is the case
async fn resolve_config(target: &TargetArgs, presenter: &Presenter) -> RelayConfig {
    let config = load_merged_config(&XdgConfigStore::new(), target.to_overrides()).await;

    if !config.enabled_or_default() {
        presenter.warn("Growl notifications are disabled (enabled = false)");
    } else if config.hosts_or_default().is_empty() {
        presenter.warn(
            "No hosts configured. Use --host or 'growl-relay config set hosts <host[:port],...>'",
        );
    }

    config
}

async fn build_dispatcher(config: &RelayConfig) -> GrowlDispatcher<GntpConnector> {
    let connector = GntpConnector::new(config.timeout_or_default());
    GrowlDispatcher::register(config, &connector).await
}

/// Register with every host and broadcast one notification.
///
/// Delivery failures never change the exit code.
pub async fn run_send(notification: Notification, target: TargetArgs, json: bool) -> ExitCode {
    let presenter = Presenter::new();
    let config = resolve_config(&target, &presenter).await;
    let dispatcher = build_dispatcher(&config).await;

    let report = dispatcher.notify(&notification).await;

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => presenter.output(&text),
            Err(e) => {
                presenter.error(&format!("Failed to encode report: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        presenter.broadcast(&report);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Register with every host and report the outcome.
///
/// Exits with an error when any configured host failed to register.
pub async fn run_register(target: TargetArgs) -> ExitCode {
    let presenter = Presenter::new();
    let config = resolve_config(&target, &presenter).await;
    let dispatcher = build_dispatcher(&config).await;

    let report = dispatcher.registration_report();
    presenter.registration(report);

    if report.failures.is_empty() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
