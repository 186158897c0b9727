use super::{AuditCapability, AuditConnection, AuditFacility, AuditMessage, Libaudit, BACKEND_NAME};
use crate::audit::AuditEvent;
use crate::backend::AuditBackend;
use crate::AuditError;

/// Audit backend that records events through the Linux audit facility.
///
/// The backend owns one facility connection for its whole lifetime. The
/// connection is opened by the constructor and closed when the backend is
/// dropped, on every path, including after a failed write.
///
/// Each event becomes one `AUDIT_USER_DEVICE` record; see
/// [`AuditMessage::render`] for the text format.
///
/// # Examples
///
/// ```no_run
/// use audit_backend::{AuditBackend, LinuxAuditBackend};
/// use audit_backend::audit::{AuditEvent, AuditOutcome, Identity};
///
/// let mut backend = LinuxAuditBackend::new()?;
///
/// let event = AuditEvent::new(Identity::new(1000, 4242))
///     .with_key("name", "device-1")
///     .with_key("rule", "allow")
///     .with_result(AuditOutcome::Success);
///
/// backend.write(&event)?;
/// # Ok::<(), audit_backend::AuditError>(())
/// ```
#[derive(Debug)]
pub struct LinuxAuditBackend<F: AuditFacility = Libaudit> {
    connection: AuditConnection<F>,
}

impl LinuxAuditBackend<Libaudit> {
    /// Opens the native Linux audit facility.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Unsupported`] without touching the OS if the
    /// facility is not compiled into this build, and
    /// [`AuditError::ResourceUnavailable`] if `audit_open` fails.
    pub fn new() -> Result<Self, AuditError> {
        Self::open(AuditCapability::detect())
    }
}

impl<F: AuditFacility> LinuxAuditBackend<F> {
    /// Opens a backend from a resolved capability.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Unsupported`] for
    /// [`AuditCapability::Unavailable`], and any error from
    /// [`with_facility`](Self::with_facility) otherwise.
    pub fn open(capability: AuditCapability<F>) -> Result<Self, AuditError> {
        match capability {
            AuditCapability::Available(facility) => Self::with_facility(facility),
            AuditCapability::Unavailable => Err(AuditError::Unsupported {
                backend: BACKEND_NAME,
                operation: "open",
            }),
        }
    }

    /// Opens a backend over a specific facility.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::ResourceUnavailable`] carrying the OS error code
    /// if the facility cannot be opened.
    pub fn with_facility(facility: F) -> Result<Self, AuditError> {
        Ok(Self {
            connection: AuditConnection::open(facility)?,
        })
    }

    /// Returns the open connection.
    pub fn connection(&self) -> &AuditConnection<F> {
        &self.connection
    }
}

impl<F: AuditFacility> AuditBackend for LinuxAuditBackend<F> {
    fn write(&mut self, event: &AuditEvent) -> Result<(), AuditError> {
        let message = AuditMessage::render(event);
        message.ensure_nul_free()?;
        self.connection.submit(&message)
    }
}
