use super::{AuditFacility, AuditMessage, BACKEND_NAME};
use crate::logging::BackendLog;
use crate::AuditError;

/// An open connection to an audit facility.
///
/// Owning a value of this type is the only way to hold a facility handle.
/// The handle is closed exactly once, when the connection is dropped.
#[derive(Debug)]
pub struct AuditConnection<F: AuditFacility> {
    facility: F,
    handle: F::Handle,
    log: BackendLog,
}

impl<F: AuditFacility> AuditConnection<F> {
    /// Opens a connection through `facility`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::ResourceUnavailable`] carrying the OS error
    /// unchanged if the facility cannot be opened.
    pub fn open(facility: F) -> Result<Self, AuditError> {
        let log = BackendLog::new(BACKEND_NAME);

        let handle = facility
            .open()
            .map_err(|source| AuditError::ResourceUnavailable {
                backend: BACKEND_NAME,
                operation: "open",
                source,
            })?;

        log.debug(format_args!("audit connection opened (handle {:?})", handle));
        Ok(Self {
            facility,
            handle,
            log,
        })
    }

    /// Submits one rendered message.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::SubmissionFailed`] if the facility rejects the
    /// message.
    pub fn submit(&self, message: &AuditMessage) -> Result<(), AuditError> {
        self.facility
            .submit(self.handle, message)
            .map_err(|source| AuditError::SubmissionFailed {
                backend: BACKEND_NAME,
                operation: "submit",
                source,
            })?;

        self.log.submitted(message);
        Ok(())
    }

    /// Returns the raw facility handle.
    pub fn handle(&self) -> F::Handle {
        self.handle
    }

    /// Returns the facility this connection was opened through.
    pub fn facility(&self) -> &F {
        &self.facility
    }
}

impl<F: AuditFacility> Drop for AuditConnection<F> {
    fn drop(&mut self) {
        self.facility.close(self.handle);
        self.log
            .debug(format_args!("audit connection closed (handle {:?})", self.handle));
    }
}
