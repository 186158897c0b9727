//! Audit event sinks for device-authorization policy engines.
//!
//! A policy engine describes each security-relevant decision as an
//! [`AuditEvent`](audit::AuditEvent): the uid and pid of the actor plus an
//! ordered list of attributes. An [`AuditBackend`] records those events
//! somewhere durable.
//!
//! # Core Types
//!
//! - [`AuditBackend`]: the sink contract, one synchronous `write` per event
//! - [`LinuxAuditBackend`]: writes `AUDIT_USER_DEVICE` records through libaudit
//! - [`SharedBackend`]: serializes commits from several producers
//! - [`UnsupportedBackend`]: fails every write when a facility is missing
//! - [`AuditTrail`]: in-memory recording backend
//! - [`AuditError`]: every failure a backend can report
//!
//! # Features
//!
//! - `linux-audit`: links libaudit. Without it, [`LinuxAuditBackend::new`]
//!   fails with [`AuditError::Unsupported`] and never touches the OS.
//!
//! # Examples
//!
//! ```
//! use audit_backend::{select_linux_backend, AuditTrail, SharedBackend};
//! use audit_backend::audit::{AuditEvent, AuditOutcome, Identity};
//!
//! // Record into memory here; a daemon would use `select_linux_backend()`.
//! let trail = AuditTrail::new();
//! let backend = SharedBackend::new(trail.clone());
//!
//! let event = AuditEvent::new(Identity::new(1000, 4242))
//!     .with_key("name", "device-1")
//!     .with_key("rule", "allow")
//!     .with_result(AuditOutcome::Success);
//!
//! backend.commit(&event).expect("trail never fails");
//! assert_eq!(trail.events(), vec![event]);
//! # let _ = select_linux_backend;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod backend;
mod error;
pub mod linux;
mod logging;

pub use audit::AuditTrail;
pub use backend::{select_linux_backend, AuditBackend, SharedBackend, UnsupportedBackend};
pub use error::AuditError;
pub use linux::LinuxAuditBackend;
