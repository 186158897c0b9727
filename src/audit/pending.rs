//! Events that are committed on every exit path.

use super::{AuditEvent, AuditOutcome, Identity};
use crate::logging::BackendLog;
use crate::{AuditError, SharedBackend};

/// An audit event that has not been committed yet.
///
/// Attributes are added while the audited operation runs. The operation then
/// ends with [`success`](Self::success) or [`failure`](Self::failure), which
/// set the `result` attribute and commit the event once. If the pending event
/// is dropped without either call, for example on an early `?` return, it is
/// committed as a failure.
///
/// # Example
///
/// ```
/// use audit_backend::{AuditTrail, SharedBackend};
/// use audit_backend::audit::{AuditOutcome, Identity, PendingAuditEvent};
///
/// let trail = AuditTrail::new();
/// let backend = SharedBackend::new(trail.clone());
///
/// let mut event = PendingAuditEvent::new(Identity::new(1000, 4242), backend.clone());
/// event.set_key("name", "device-1");
/// event.success().unwrap();
///
/// {
///     let _abandoned = PendingAuditEvent::new(Identity::new(1000, 4242), backend);
/// }
///
/// let events = trail.events();
/// assert_eq!(events[0].outcome(), AuditOutcome::Success);
/// assert_eq!(events[1].outcome(), AuditOutcome::Failure);
/// ```
#[derive(Debug)]
pub struct PendingAuditEvent {
    event: AuditEvent,
    backend: SharedBackend,
    committed: bool,
}

impl PendingAuditEvent {
    /// Starts an event for `identity` that will be committed to `backend`.
    pub fn new(identity: Identity, backend: SharedBackend) -> Self {
        Self {
            event: AuditEvent::new(identity),
            backend,
            committed: false,
        }
    }

    /// Sets an attribute on the pending event.
    pub fn set_key(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.event.set_key(name, value);
    }

    /// Returns the event as it would be committed now, minus the outcome.
    pub fn event(&self) -> &AuditEvent {
        &self.event
    }

    /// Commits the event as a success.
    ///
    /// # Errors
    ///
    /// Returns the backend's write error.
    pub fn success(mut self) -> Result<(), AuditError> {
        self.commit(AuditOutcome::Success)
    }

    /// Commits the event as a failure.
    ///
    /// # Errors
    ///
    /// Returns the backend's write error.
    pub fn failure(mut self) -> Result<(), AuditError> {
        self.commit(AuditOutcome::Failure)
    }

    fn commit(&mut self, outcome: AuditOutcome) -> Result<(), AuditError> {
        self.committed = true;
        self.event.set_result(outcome);
        self.backend.commit(&self.event)
    }
}

impl Drop for PendingAuditEvent {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        // Nobody is left to receive the error.
        if let Err(err) = self.commit(AuditOutcome::Failure) {
            BackendLog::new("pending").warn(format_args!(
                "dropping uncommitted audit event failed: {}",
                err
            ));
        }
    }
}
