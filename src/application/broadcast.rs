//! Growl registration and broadcast use case

use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use crate::domain::config::RelayConfig;
use crate::domain::endpoint::Endpoint;
use crate::domain::notification::Notification;

use super::ports::{GrowlClient, GrowlConnector, GrowlError, Registration};

/// A host that could not be registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFailure {
    /// Host string exactly as configured
    pub host: String,
    pub error: GrowlError,
}

/// Outcome of the registration phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    /// Registered endpoints, in configuration order
    pub registered: Vec<Endpoint>,
    pub failures: Vec<RegistrationFailure>,
}

/// A registered endpoint that did not accept a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryFailure {
    pub endpoint: String,
    pub error: String,
}

/// Outcome of one broadcast
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BroadcastReport {
    pub attempted: usize,
    pub delivered: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl BroadcastReport {
    /// True when every attempted endpoint accepted the notification
    pub fn all_delivered(&self) -> bool {
        self.delivered == self.attempted
    }
}

/// Fans notifications out to every registered Growl daemon.
///
/// Failures never escape: a host that cannot be parsed or registered is
/// dropped, and a failed delivery only shows up in the returned report.
pub struct GrowlDispatcher<C: GrowlConnector> {
    enabled: bool,
    clients: Vec<(Endpoint, C::Client)>,
    report: RegistrationReport,
}

impl<C: GrowlConnector> GrowlDispatcher<C> {
    /// Register with every configured host, in order.
    pub async fn register(config: &RelayConfig, connector: &C) -> Self {
        let enabled = config.enabled_or_default();
        let mut dispatcher = Self {
            enabled,
            clients: Vec::new(),
            report: RegistrationReport::default(),
        };

        if !enabled {
            info!("Growl notifications are disabled");
            return dispatcher;
        }

        if config.hosts_or_default().is_empty() {
            warn!("No Growl hosts configured");
            return dispatcher;
        }

        let registration = Registration::new(config.app_name_or_default());

        for (raw, parsed) in config.host_specs() {
            let outcome = match parsed {
                Ok(spec) => {
                    let client = connector.client(&spec, &registration);
                    let registered = client.register().await;
                    registered.map(|()| (spec, client))
                }
                Err(e) => Err(GrowlError::from(e)),
            };

            match outcome {
                Ok((spec, client)) => {
                    let endpoint = Endpoint::new(spec).into_registered();
                    info!("Growl notifier registered for {}", endpoint);
                    dispatcher.report.registered.push(endpoint.clone());
                    dispatcher.clients.push((endpoint, client));
                }
                Err(e) => {
                    error!("Failed to register Growl notifier for {}: {}", raw, e);
                    dispatcher.report.failures.push(RegistrationFailure {
                        host: raw,
                        error: e,
                    });
                }
            }
        }

        dispatcher
    }

    /// Whether notifications are enabled at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Endpoints that completed registration, in configuration order
    pub fn endpoints(&self) -> Vec<&Endpoint> {
        self.clients.iter().map(|(endpoint, _)| endpoint).collect()
    }

    /// What happened during registration
    pub fn registration_report(&self) -> &RegistrationReport {
        &self.report
    }

    /// Send a notification to every registered endpoint.
    pub async fn notify(&self, notification: &Notification) -> BroadcastReport {
        let mut report = BroadcastReport::default();

        if !self.enabled {
            return report;
        }

        for (endpoint, client) in &self.clients {
            report.attempted += 1;
            match client.notify(notification).await {
                Ok(()) => {
                    report.delivered += 1;
                    debug!("{} notification sent to {}", notification.note_type, endpoint);
                }
                Err(e) => {
                    error!("Failed to send notification to {}: {}", endpoint, e);
                    report.failures.push(DeliveryFailure {
                        endpoint: endpoint.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        if report.delivered > 0 {
            info!(
                "Notification sent to {}/{} host(s)",
                report.delivered, report.attempted
            );
        } else if report.attempted > 0 {
            warn!("Notification sent to 0/{} host(s)", report.attempted);
        }

        report
    }
}

/// Dispatcher that registers on first use.
///
/// Lets a composition root own a lazily-built dispatcher instead of
/// reaching for process-wide state.
pub struct LazyDispatcher<C: GrowlConnector> {
    config: RelayConfig,
    connector: C,
    cell: OnceCell<GrowlDispatcher<C>>,
}

impl<C: GrowlConnector> LazyDispatcher<C> {
    pub fn new(config: RelayConfig, connector: C) -> Self {
        Self {
            config,
            connector,
            cell: OnceCell::new(),
        }
    }

    /// Get the dispatcher, registering with every host on the first call
    pub async fn get(&self) -> &GrowlDispatcher<C> {
        self.cell
            .get_or_init(|| GrowlDispatcher::register(&self.config, &self.connector))
            .await
    }

    /// Whether registration already ran
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn notify(&self, notification: &Notification) -> BroadcastReport {
        self.get().await.notify(notification).await
    }
}
