//! Linux audit backend.
//!
//! This module provides:
//! - `LinuxAuditBackend`: an [`AuditBackend`](crate::AuditBackend) that
//!   writes `AUDIT_USER_DEVICE` records through libaudit
//! - `AuditMessage`: the rendered single-line record text and outcome code
//! - `AuditFacility`: the open/submit/close operations a backend needs
//! - `AuditCapability`: whether the native facility is part of this build
//!
//! The native facility is only compiled in with the `linux-audit` feature on
//! Linux targets. Without it, [`Libaudit`] has no values and every attempt to
//! open the backend fails with [`AuditError::Unsupported`](crate::AuditError::Unsupported).

mod backend;
mod connection;
mod facility;
mod libaudit;
mod message;

pub use backend::LinuxAuditBackend;
pub use connection::AuditConnection;
pub use facility::{AuditCapability, AuditFacility};
pub use libaudit::Libaudit;
pub use message::{AuditMessage, AUDIT_USER_DEVICE};

/// Name reported by the Linux audit backend in errors and logs.
pub const BACKEND_NAME: &str = "linux-audit";
