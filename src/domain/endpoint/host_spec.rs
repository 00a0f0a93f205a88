//! Host specification value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::HostSpecParseError;

/// Default GNTP port
pub const DEFAULT_GNTP_PORT: u16 = 23053;

/// A resolved `(hostname, port)` pair parsed from `host` or `host:port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostSpec {
    hostname: String,
    port: u16,
}

impl HostSpec {
    /// Create a host spec from already-validated parts
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
        }
    }

    /// Host spec on the default GNTP port
    pub fn with_default_port(hostname: impl Into<String>) -> Self {
        Self::new(hostname, DEFAULT_GNTP_PORT)
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl FromStr for HostSpec {
    type Err = HostSpecParseError;

    /// Parse `"host"`, `"host:port"`, `"[v6addr]"` or `"[v6addr]:port"`.
    /// Outside brackets the port is taken from the substring after the last `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        let (hostname, port) = match input.strip_prefix('[') {
            Some(bracketed) => {
                let (host, rest) = bracketed.split_once(']').ok_or_else(|| {
                    HostSpecParseError::InvalidHostname {
                        input: s.to_string(),
                    }
                })?;
                let port = match rest.trim() {
                    "" => DEFAULT_GNTP_PORT,
                    rest => match rest.strip_prefix(':') {
                        Some(port) => parse_port(port, s)?,
                        None => {
                            return Err(HostSpecParseError::InvalidHostname {
                                input: s.to_string(),
                            })
                        }
                    },
                };
                (host.trim(), port)
            }
            None => match input.rsplit_once(':') {
                Some((host, port)) => (host.trim(), parse_port(port, s)?),
                None => (input, DEFAULT_GNTP_PORT),
            },
        };

        if hostname.is_empty() {
            return Err(HostSpecParseError::EmptyHostname {
                input: s.to_string(),
            });
        }

        // An unbracketed IPv6 address cannot be told apart from host:port
        if hostname.contains(']') || (hostname.contains(':') && !input.starts_with('[')) {
            return Err(HostSpecParseError::InvalidHostname {
                input: s.to_string(),
            });
        }

        Ok(Self::new(hostname, port))
    }
}

fn parse_port(port: &str, input: &str) -> Result<u16, HostSpecParseError> {
    port.trim()
        .parse::<u16>()
        .ok()
        .filter(|p| *p > 0)
        .ok_or_else(|| HostSpecParseError::InvalidPort {
            input: input.to_string(),
        })
}

impl fmt::Display for HostSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hostname.contains(':') {
            write!(f, "[{}]:{}", self.hostname, self.port)
        } else {
            write!(f, "{}:{}", self.hostname, self.port)
        }
    }
}
