//! Notification domain module

mod note_type;

pub use note_type::{NotificationType, ALL_NOTIFICATION_TYPES};

/// A single notification to broadcast. Lives for one dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub note_type: NotificationType,
    /// Ask the daemon not to auto-dismiss the notification
    pub sticky: bool,
}

impl Notification {
    /// Non-sticky `Info` notification
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            note_type: NotificationType::default(),
            sticky: false,
        }
    }

    pub fn with_type(mut self, note_type: NotificationType) -> Self {
        self.note_type = note_type;
        self
    }

    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }
}
