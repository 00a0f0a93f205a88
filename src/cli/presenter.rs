//! CLI presenter for output formatting

use colored::*;

use crate::application::{BroadcastReport, RegistrationReport};

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Summarize a broadcast
    pub fn broadcast(&self, report: &BroadcastReport) {
        for failure in &report.failures {
            self.error(&format!("{}: {}", failure.endpoint, failure.error));
        }
        let summary = format_delivery(report);
        if report.delivered > 0 {
            self.success(&summary);
        } else {
            self.warn(&summary);
        }
    }

    /// Summarize a registration pass
    pub fn registration(&self, report: &RegistrationReport) {
        for endpoint in &report.registered {
            self.success(&format!("Registered with {}", endpoint));
        }
        for failure in &report.failures {
            self.error(&format!("{}: {}", failure.host, failure.error));
        }
        self.info(&format_registration(report));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// "Delivered to 2/3 host(s)"
pub fn format_delivery(report: &BroadcastReport) -> String {
    format!(
        "Delivered to {}/{} host(s)",
        report.delivered, report.attempted
    )
}

/// "Registered 1 of 2 host(s)"
pub fn format_registration(report: &RegistrationReport) -> String {
    let total = report.registered.len() + report.failures.len();
    format!(
        "Registered {} of {} host(s)",
        report.registered.len(),
        total
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::GrowlError;
    use crate::application::RegistrationFailure;
    use crate::domain::endpoint::{Endpoint, HostSpec};

    #[test]
    fn format_delivery_counts() {
        let report = BroadcastReport {
            attempted: 3,
            delivered: 2,
            failures: vec![],
        };
        assert_eq!(format_delivery(&report), "Delivered to 2/3 host(s)");
    }

    #[test]
    fn format_delivery_empty() {
        assert_eq!(
            format_delivery(&BroadcastReport::default()),
            "Delivered to 0/0 host(s)"
        );
    }

    #[test]
    fn format_registration_counts_failures() {
        let report = RegistrationReport {
            registered: vec![Endpoint::new(HostSpec::with_default_port("a")).into_registered()],
            failures: vec![RegistrationFailure {
                host: "b".to_string(),
                error: GrowlError::Connection("refused".to_string()),
            }],
        };
        assert_eq!(format_registration(&report), "Registered 1 of 2 host(s)");
    }
}
