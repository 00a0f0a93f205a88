//! GNTP/1.0 request encoding and response parsing
//!
//! Only the subset needed for REGISTER and NOTIFY without encryption or
//! password hashing.

use crate::application::ports::{GrowlError, Registration};
use crate::domain::notification::Notification;

pub const GNTP_VERSION: &str = "GNTP/1.0";

const EOL: &str = "\r\n";

/// Header values may not span lines
fn header_value(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "")
}

fn push_header(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str(": ");
    out.push_str(&header_value(value));
    out.push_str(EOL);
}

fn push_request_line(out: &mut String, message_type: &str) {
    out.push_str(GNTP_VERSION);
    out.push(' ');
    out.push_str(message_type);
    out.push_str(" NONE");
    out.push_str(EOL);
}

fn push_origin(out: &mut String) {
    push_header(out, "Origin-Software-Name", env!("CARGO_PKG_NAME"));
    push_header(out, "Origin-Software-Version", env!("CARGO_PKG_VERSION"));
    push_header(out, "Origin-Platform-Name", std::env::consts::OS);
}

fn gntp_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Encode a REGISTER request.
///
/// Each notification type gets its own header block preceded by a blank line.
pub fn encode_register(registration: &Registration) -> String {
    let mut out = String::with_capacity(512);
    push_request_line(&mut out, "REGISTER");
    push_header(&mut out, "Application-Name", &registration.app_name);
    push_header(
        &mut out,
        "Notifications-Count",
        &registration.notifications.len().to_string(),
    );
    push_origin(&mut out);

    for note_type in &registration.notifications {
        out.push_str(EOL);
        push_header(&mut out, "Notification-Name", note_type.wire_name());
        push_header(&mut out, "Notification-Display-Name", note_type.wire_name());
        push_header(
            &mut out,
            "Notification-Enabled",
            gntp_bool(registration.is_enabled(*note_type)),
        );
    }

    out.push_str(EOL);
    out
}

/// Encode a NOTIFY request.
pub fn encode_notify(app_name: &str, notification: &Notification) -> String {
    let mut out = String::with_capacity(256);
    push_request_line(&mut out, "NOTIFY");
    push_header(&mut out, "Application-Name", app_name);
    push_header(&mut out, "Notification-Name", notification.note_type.wire_name());
    push_header(&mut out, "Notification-Title", &notification.title);
    push_header(&mut out, "Notification-Text", &notification.message);
    push_header(&mut out, "Notification-Sticky", gntp_bool(notification.sticky));
    push_header(&mut out, "Notification-Priority", "0");
    push_origin(&mut out);
    out.push_str(EOL);
    out
}

/// Look up a header in a response, case-insensitively
fn find_header<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    raw.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim().eq_ignore_ascii_case(name).then_some(value.trim())
    })
}

/// Interpret a daemon response.
///
/// `-OK` is success; `-ERROR` carries `Error-Code` and `Error-Description`.
pub fn parse_response(raw: &str) -> Result<(), GrowlError> {
    let status_line = raw.lines().next().unwrap_or("").trim();
    let mut parts = status_line.split_whitespace();
    let version = parts.next().unwrap_or("");
    let directive = parts.next().unwrap_or("");

    if !version.starts_with("GNTP/") {
        let description = if status_line.is_empty() {
            "empty response".to_string()
        } else {
            format!("malformed response: {}", status_line)
        };
        return Err(GrowlError::Protocol {
            code: "malformed".to_string(),
            description,
        });
    }

    match directive {
        "-OK" => Ok(()),
        "-ERROR" => Err(GrowlError::Protocol {
            code: find_header(raw, "Error-Code").unwrap_or("unknown").to_string(),
            description: find_header(raw, "Error-Description")
                .unwrap_or("no description")
                .to_string(),
        }),
        other => Err(GrowlError::Protocol {
            code: "malformed".to_string(),
            description: format!("unexpected response directive: {}", other),
        }),
    }
}
