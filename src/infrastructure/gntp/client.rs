//! GNTP over TCP adapter

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::application::ports::{GrowlClient, GrowlConnector, GrowlError, Registration};
use crate::domain::config::DEFAULT_TIMEOUT_SECS;
use crate::domain::endpoint::HostSpec;
use crate::domain::notification::Notification;

use super::message;

/// Upper bound on a daemon response we are willing to buffer
const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Builds [`GntpClient`]s sharing one network timeout
#[derive(Debug, Clone)]
pub struct GntpConnector {
    timeout: Duration,
}

impl GntpConnector {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for GntpConnector {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl GrowlConnector for GntpConnector {
    type Client = GntpClient;

    fn client(&self, host: &HostSpec, registration: &Registration) -> GntpClient {
        GntpClient {
            host: host.clone(),
            registration: registration.clone(),
            timeout: self.timeout,
        }
    }
}

/// GNTP client for one daemon. Opens a new connection per request.
#[derive(Debug, Clone)]
pub struct GntpClient {
    host: HostSpec,
    registration: Registration,
    timeout: Duration,
}

impl GntpClient {
    pub fn host(&self) -> &HostSpec {
        &self.host
    }

    /// Send one request and interpret the reply, bounded by the timeout
    async fn exchange(&self, request: String) -> Result<(), GrowlError> {
        tokio::time::timeout(self.timeout, self.round_trip(request))
            .await
            .map_err(|_| GrowlError::Timeout(self.timeout))?
    }

    async fn round_trip(&self, request: String) -> Result<(), GrowlError> {
        let mut stream = TcpStream::connect((self.host.hostname(), self.host.port()))
            .await
            .map_err(|e| GrowlError::Connection(e.to_string()))?;

        stream
            .write_all(request.as_bytes())
            .await
            .map_err(|e| GrowlError::Connection(e.to_string()))?;

        let response = read_response(&mut stream).await?;
        message::parse_response(&response)
    }
}

/// Read until the blank line that ends a GNTP message, or EOF
async fn read_response(stream: &mut TcpStream) -> Result<String, GrowlError> {
    let mut buf = Vec::with_capacity(512);
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream
            .read(&mut chunk)
            .await
            .map_err(|e| GrowlError::Connection(e.to_string()))?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() >= MAX_RESPONSE_BYTES {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[async_trait]
impl GrowlClient for GntpClient {
    async fn register(&self) -> Result<(), GrowlError> {
        self.exchange(message::encode_register(&self.registration))
            .await
    }

    async fn notify(&self, notification: &Notification) -> Result<(), GrowlError> {
        self.exchange(message::encode_notify(
            &self.registration.app_name,
            notification,
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_connector_uses_default_timeout() {
        let connector = GntpConnector::default();
        assert_eq!(connector.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn client_is_bound_to_host() {
        let connector = GntpConnector::new(Duration::from_millis(250));
        let client = connector.client(
            &HostSpec::new("growl.lan", 9000),
            &Registration::new("App"),
        );
        assert_eq!(client.host().to_string(), "growl.lan:9000");
        assert_eq!(client.timeout, Duration::from_millis(250));
    }
}
