//! Rendering of audit events into Linux audit user messages.

use crate::audit::{AuditEvent, AuditOutcome, RESULT_KEY};
use crate::AuditError;

/// Linux audit message type for user space hotplug device changes.
pub const AUDIT_USER_DEVICE: i32 = 1137;

/// A rendered audit record, ready for submission.
///
/// The text is a single line of the form
/// `uid=<uid> pid=<pid> name1='value1' name2='value2' `. The reserved
/// `result` attribute never appears in the text; it becomes the outcome code
/// instead.
///
/// # Example
///
/// ```
/// use audit_backend::audit::{AuditEvent, AuditOutcome, Identity};
/// use audit_backend::linux::AuditMessage;
///
/// let event = AuditEvent::new(Identity::new(0, 1))
///     .with_key("result", "FAILURE")
///     .with_key("reason", "blocked");
///
/// let message = AuditMessage::render(&event);
/// assert_eq!(message.text(), "uid=0 pid=1 reason='blocked' ");
/// assert_eq!(message.outcome(), AuditOutcome::Failure);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditMessage {
    message_type: i32,
    text: String,
    outcome: AuditOutcome,
}

impl AuditMessage {
    /// Renders an event as an [`AUDIT_USER_DEVICE`] message.
    ///
    /// Values are copied verbatim: no escaping, no truncation. A value that
    /// contains a single quote produces text that audit tooling may split
    /// differently.
    pub fn render(event: &AuditEvent) -> Self {
        let identity = event.identity();
        let mut outcome = AuditOutcome::Failure;

        let mut text = String::from("uid=");
        text.push_str(&identity.uid().to_string());
        text.push_str(" pid=");
        text.push_str(&identity.pid().to_string());
        text.push(' ');

        for (name, value) in event.keys() {
            if name == RESULT_KEY {
                outcome = AuditOutcome::from_result_value(value);
            } else {
                text.push_str(name);
                text.push_str("='");
                text.push_str(value);
                text.push_str("' ");
            }
        }

        Self {
            message_type: AUDIT_USER_DEVICE,
            text,
            outcome,
        }
    }

    /// Returns the audit message type.
    pub fn message_type(&self) -> i32 {
        self.message_type
    }

    /// Returns the rendered message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the outcome code attached to the record.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    /// Checks that the text can cross a C string boundary.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidMessage`] with the offset of the first
    /// NUL byte.
    pub fn ensure_nul_free(&self) -> Result<(), AuditError> {
        match self.text.bytes().position(|b| b == 0) {
            Some(offset) => Err(AuditError::InvalidMessage { offset }),
            None => Ok(()),
        }
    }
}
