use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::audit::AuditEvent;
use crate::linux::{AuditCapability, LinuxAuditBackend, BACKEND_NAME};
use crate::AuditError;

/// Trait for sinks that durably record audit events.
///
/// `AuditBackend` is the only thing callers depend on. A backend owns
/// whatever resource it writes to for its whole lifetime and releases it when
/// dropped, so there is no explicit open or close in the contract.
///
/// `write` takes `&mut self`: a backend is never driven from two threads at
/// once without external locking. Use [`SharedBackend`] to share one backend
/// between producers.
///
/// # Examples
///
/// ```
/// use audit_backend::{AuditBackend, AuditTrail};
/// use audit_backend::audit::{AuditEvent, Identity};
///
/// fn record_all(backend: &mut dyn AuditBackend, events: &[AuditEvent]) {
///     for event in events {
///         backend.write(event).expect("trail never fails");
///     }
/// }
///
/// let mut trail = AuditTrail::new();
/// record_all(&mut trail, &[AuditEvent::new(Identity::new(0, 1))]);
/// assert_eq!(trail.len(), 1);
/// ```
pub trait AuditBackend {
    /// Submits one event for durable recording.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Unsupported`] when the backend's facility is not
    /// available in this build, and [`AuditError::SubmissionFailed`] when the
    /// facility rejects or cannot deliver the record. Failed writes are not
    /// retried.
    fn write(&mut self, event: &AuditEvent) -> Result<(), AuditError>;
}

impl<B: AuditBackend + ?Sized> AuditBackend for Box<B> {
    fn write(&mut self, event: &AuditEvent) -> Result<(), AuditError> {
        (**self).write(event)
    }
}

impl<B: AuditBackend + ?Sized> AuditBackend for &mut B {
    fn write(&mut self, event: &AuditEvent) -> Result<(), AuditError> {
        (**self).write(event)
    }
}

/// A backend that fails every write with [`AuditError::Unsupported`].
///
/// This is what backend selection falls back to when the requested facility
/// is missing from the build: the embedding daemon keeps running, and every
/// event reports the missing facility instead of vanishing.
///
/// # Examples
///
/// ```
/// use audit_backend::{AuditBackend, UnsupportedBackend};
/// use audit_backend::audit::{AuditEvent, Identity};
///
/// let mut backend = UnsupportedBackend::new("linux-audit");
/// let err = backend.write(&AuditEvent::new(Identity::new(0, 1))).unwrap_err();
/// assert!(err.is_unsupported());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedBackend {
    name: &'static str,
}

impl UnsupportedBackend {
    /// Creates a fail-fast stand-in for the named backend.
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the name of the backend this stands in for.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl AuditBackend for UnsupportedBackend {
    fn write(&mut self, _event: &AuditEvent) -> Result<(), AuditError> {
        Err(AuditError::Unsupported {
            backend: self.name,
            operation: "write",
        })
    }
}

/// Selects the Linux audit backend if the facility is compiled in.
///
/// Availability is resolved once, here. When the facility is present the
/// connection is opened immediately and open errors are returned. When it is
/// absent an [`UnsupportedBackend`] is returned, which fails every write.
///
/// # Errors
///
/// Returns [`AuditError::ResourceUnavailable`] if the facility exists but
/// cannot be opened.
pub fn select_linux_backend() -> Result<Box<dyn AuditBackend + Send>, AuditError> {
    match AuditCapability::detect() {
        AuditCapability::Available(facility) => {
            Ok(Box::new(LinuxAuditBackend::with_facility(facility)?))
        }
        AuditCapability::Unavailable => Ok(Box::new(UnsupportedBackend::new(BACKEND_NAME))),
    }
}

/// A cloneable handle that serializes writes to one backend.
///
/// Every [`commit`](Self::commit) takes the lock, then calls
/// [`AuditBackend::write`]. Events committed from different threads reach the
/// backend one at a time, in lock acquisition order.
///
/// # Examples
///
/// ```
/// use audit_backend::{AuditTrail, SharedBackend};
/// use audit_backend::audit::{AuditEvent, Identity};
///
/// let trail = AuditTrail::new();
/// let shared = SharedBackend::new(trail.clone());
///
/// let producer = shared.clone();
/// std::thread::spawn(move || {
///     producer
///         .commit(&AuditEvent::new(Identity::new(0, 1)))
///         .expect("trail never fails");
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(trail.len(), 1);
/// ```
#[derive(Clone)]
pub struct SharedBackend {
    inner: Arc<Mutex<Box<dyn AuditBackend + Send>>>,
}

impl SharedBackend {
    /// Wraps a backend for shared use.
    pub fn new(backend: impl AuditBackend + Send + 'static) -> Self {
        Self::from_boxed(Box::new(backend))
    }

    /// Wraps an already boxed backend, such as the result of
    /// [`select_linux_backend`].
    pub fn from_boxed(backend: Box<dyn AuditBackend + Send>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(backend)),
        }
    }

    /// Writes one event while holding the backend lock.
    ///
    /// # Errors
    ///
    /// Returns whatever the wrapped backend's `write` returns.
    pub fn commit(&self, event: &AuditEvent) -> Result<(), AuditError> {
        // A panic inside another writer leaves the backend itself intact.
        let mut backend = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        backend.write(event)
    }
}

impl fmt::Debug for SharedBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedBackend")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}
