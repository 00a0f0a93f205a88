//! Endpoint domain module

mod host_spec;

pub use host_spec::{HostSpec, DEFAULT_GNTP_PORT};

/// A remote Growl daemon plus its registration status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    spec: HostSpec,
    registered: bool,
}

impl Endpoint {
    /// Endpoint that has not completed the registration handshake yet
    pub fn new(spec: HostSpec) -> Self {
        Self {
            spec,
            registered: false,
        }
    }

    /// Mark the endpoint as registered
    pub fn into_registered(self) -> Self {
        Self {
            registered: true,
            ..self
        }
    }

    pub fn hostname(&self) -> &str {
        self.spec.hostname()
    }

    pub fn port(&self) -> u16 {
        self.spec.port()
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.spec, f)
    }
}
