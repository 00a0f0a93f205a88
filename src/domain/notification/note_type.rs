//! Notification type value object

use std::fmt;

/// Every notification type, in the order they are registered
pub const ALL_NOTIFICATION_TYPES: &[NotificationType] = &[
    NotificationType::ServerStatus,
    NotificationType::Error,
    NotificationType::Info,
];

/// Notification categories announced to every daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationType {
    #[default]
    Info,
    Error,
    ServerStatus,
}

impl NotificationType {
    /// Name used on the wire and shown by the daemon
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Error => "Error",
            Self::ServerStatus => "Server Status",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_info() {
        assert_eq!(NotificationType::default(), NotificationType::Info);
    }

    #[test]
    fn wire_names() {
        assert_eq!(NotificationType::Info.wire_name(), "Info");
        assert_eq!(NotificationType::Error.wire_name(), "Error");
        assert_eq!(NotificationType::ServerStatus.wire_name(), "Server Status");
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(NotificationType::ServerStatus.to_string(), "Server Status");
    }

    #[test]
    fn all_types_are_registered_in_order() {
        let names: Vec<_> = ALL_NOTIFICATION_TYPES.iter().map(|t| t.wire_name()).collect();
        assert_eq!(names, ["Server Status", "Error", "Info"]);
    }
}
