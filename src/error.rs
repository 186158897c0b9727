use std::io;

use thiserror::Error;

/// Errors produced by audit backends.
///
/// Every failure is returned to the caller of the failing operation. Backends
/// never retry, reconnect, or swallow an error on their own.
///
/// # Examples
///
/// ```
/// use audit_backend::AuditError;
/// use std::io;
///
/// let error = AuditError::ResourceUnavailable {
///     backend: "linux-audit",
///     operation: "open",
///     source: io::Error::from_raw_os_error(13),
/// };
/// assert_eq!(error.raw_os_error(), Some(13));
/// assert_eq!(error.operation(), "open");
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// The audit facility could not be opened.
    ///
    /// Fatal to the backend being constructed; no degraded mode exists.
    #[error("{backend}: {operation} failed: {source}")]
    ResourceUnavailable {
        /// Name of the backend that failed
        backend: &'static str,
        /// The facility operation that failed (e.g. `"open"`)
        operation: &'static str,
        /// The originating OS error, errno preserved
        #[source]
        source: io::Error,
    },

    /// The audit facility is not compiled into this build.
    #[error("{backend}: {operation} not supported")]
    Unsupported {
        /// Name of the backend that was requested
        backend: &'static str,
        /// The operation that was attempted
        operation: &'static str,
    },

    /// The facility rejected or could not deliver a record.
    #[error("{backend}: {operation} failed: {source}")]
    SubmissionFailed {
        /// Name of the backend that failed
        backend: &'static str,
        /// The facility operation that failed
        operation: &'static str,
        /// The originating OS error
        #[source]
        source: io::Error,
    },

    /// The rendered message cannot be handed to the facility.
    #[error("audit message contains a NUL byte at offset {offset}")]
    InvalidMessage {
        /// Byte offset of the first NUL in the rendered message
        offset: usize,
    },
}

impl AuditError {
    /// Returns the OS error code carried by this error, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            Self::ResourceUnavailable { source, .. } | Self::SubmissionFailed { source, .. } => {
                source.raw_os_error()
            }
            Self::Unsupported { .. } | Self::InvalidMessage { .. } => None,
        }
    }

    /// Returns the name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::ResourceUnavailable { operation, .. }
            | Self::Unsupported { operation, .. }
            | Self::SubmissionFailed { operation, .. } => operation,
            Self::InvalidMessage { .. } => "render",
        }
    }

    /// Returns `true` if the facility is absent from this build.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}
