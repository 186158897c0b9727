//! In-memory audit trail recorder.
//!
//! This module provides a recording backend for testing and demonstration
//! purposes.

use super::AuditEvent;
use crate::{AuditBackend, AuditError};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// In-memory backend that keeps every written event.
///
/// Clones share the same storage, so a trail can be handed to a
/// [`SharedBackend`](crate::SharedBackend) and inspected afterwards. Writes
/// never fail.
///
/// # Example
///
/// ```
/// use audit_backend::{AuditBackend, AuditTrail};
/// use audit_backend::audit::{AuditEvent, Identity};
///
/// let mut trail = AuditTrail::new();
///
/// trail
///     .write(&AuditEvent::new(Identity::new(1000, 4242)).with_key("rule", "allow"))
///     .unwrap();
///
/// assert_eq!(trail.events().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AuditTrail {
    events: Arc<Mutex<Vec<AuditEvent>>>,
}

impl AuditTrail {
    /// Creates a new empty audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an audit event.
    ///
    /// Events are stored in the order they are recorded.
    pub fn record(&self, event: AuditEvent) {
        self.lock().push(event);
    }

    /// Returns a snapshot of all recorded events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AuditEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AuditBackend for AuditTrail {
    fn write(&mut self, event: &AuditEvent) -> Result<(), AuditError> {
        self.record(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditOutcome, Identity};

    #[test]
    fn audit_trail_starts_empty() {
        let trail = AuditTrail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
    }

    #[test]
    fn audit_trail_records_in_order() {
        let mut trail = AuditTrail::new();

        trail
            .write(&AuditEvent::new(Identity::new(1, 10)).with_result(AuditOutcome::Success))
            .unwrap();
        trail
            .write(&AuditEvent::new(Identity::new(2, 20)).with_result(AuditOutcome::Failure))
            .unwrap();

        let events = trail.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].identity().uid(), 1);
        assert_eq!(events[1].identity().uid(), 2);
        assert_eq!(events[1].outcome(), AuditOutcome::Failure);
    }

    #[test]
    fn clones_share_storage() {
        let trail = AuditTrail::new();
        let mut writer = trail.clone();

        writer.write(&AuditEvent::new(Identity::new(0, 1))).unwrap();

        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn audit_trail_can_be_cleared() {
        let trail = AuditTrail::new();
        trail.record(AuditEvent::new(Identity::new(0, 1)));
        assert_eq!(trail.len(), 1);

        trail.clear();

        assert!(trail.is_empty());
    }
}
