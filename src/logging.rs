use std::fmt;

use crate::linux::AuditMessage;

/// Target used for every log record emitted by this crate.
pub(crate) const LOG_TARGET: &str = "audit_backend";

/// A structured logger bound to one backend.
///
/// Every record carries the backend name as a field, so lifecycle events of
/// several backends in one process can be told apart.
///
/// Errors returned to callers are not logged here; the caller decides how to
/// report them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackendLog {
    backend: &'static str,
}

impl BackendLog {
    /// Creates a logger for the named backend.
    pub(crate) fn new(backend: &'static str) -> Self {
        Self { backend }
    }

    /// Returns the backend name attached to each record.
    #[allow(dead_code)] // Used in tests
    pub(crate) fn backend(&self) -> &'static str {
        self.backend
    }

    /// Logs a debug-level message with the backend name.
    pub(crate) fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(target: LOG_TARGET, backend = %self.backend, "{}", args);
    }

    /// Logs a warning-level message with the backend name.
    pub(crate) fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(target: LOG_TARGET, backend = %self.backend, "{}", args);
    }

    /// Logs a submitted record.
    ///
    /// Only the length of the text is logged. Attribute values may name users
    /// or devices and belong in the audit log, not the diagnostic log.
    pub(crate) fn submitted(&self, message: &AuditMessage) {
        tracing::trace!(
            target: LOG_TARGET,
            backend = %self.backend,
            message_type = message.message_type(),
            len = message.text().len(),
            outcome = %message.outcome(),
            "audit record submitted"
        );
    }
}
