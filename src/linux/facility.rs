use std::fmt;
use std::io;

use super::{AuditMessage, Libaudit};

/// The operations a backend needs from an OS audit facility.
///
/// [`Libaudit`] is the native implementation. Other implementations exist to
/// simulate the facility, for example to inject open or submit failures.
pub trait AuditFacility {
    /// An open connection to the facility.
    type Handle: Copy + fmt::Debug;

    /// Opens a connection.
    ///
    /// # Errors
    ///
    /// Returns the OS error that prevented the connection from opening.
    fn open(&self) -> io::Result<Self::Handle>;

    /// Submits one rendered message over an open connection.
    ///
    /// # Errors
    ///
    /// Returns the OS error reported by the facility.
    fn submit(&self, handle: Self::Handle, message: &AuditMessage) -> io::Result<()>;

    /// Closes a connection. Called exactly once per successful `open`.
    fn close(&self, handle: Self::Handle);
}

/// Whether an audit facility exists in this build.
///
/// Resolved once, at backend selection, instead of being re-checked by every
/// operation.
///
/// ```
/// use audit_backend::linux::AuditCapability;
///
/// let capability = AuditCapability::detect();
/// assert_eq!(
///     capability.is_available(),
///     cfg!(all(feature = "linux-audit", target_os = "linux"))
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub enum AuditCapability<F = Libaudit> {
    /// The facility is compiled in
    Available(F),
    /// The facility is not part of this build
    Unavailable,
}

impl AuditCapability<Libaudit> {
    /// Detects whether the native Linux audit facility is compiled in.
    ///
    /// This does not touch the OS.
    pub fn detect() -> Self {
        Libaudit::probe().into()
    }
}

impl<F> AuditCapability<F> {
    /// Returns `true` if a facility is available.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl<F> From<Option<F>> for AuditCapability<F> {
    fn from(facility: Option<F>) -> Self {
        match facility {
            Some(facility) => Self::Available(facility),
            None => Self::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_from_option() {
        assert!(AuditCapability::from(Some(())).is_available());
        assert!(!AuditCapability::<()>::from(None).is_available());
    }

    #[test]
    fn detect_matches_build_configuration() {
        let expected = cfg!(all(feature = "linux-audit", target_os = "linux"));
        assert_eq!(AuditCapability::detect().is_available(), expected);
    }
}
