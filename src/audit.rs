//! Audit events and event-level helpers.
//!
//! This module provides:
//! - `Identity`: the uid and pid of the actor behind an event
//! - `AuditEvent`: identity plus ordered key/value attributes
//! - `AuditOutcome`: the coarse result carried by the reserved `result` key
//! - `PendingAuditEvent`: an event that is committed on every exit path
//! - `AuditTrail`: in-memory recording backend
//!
//! Attribute names are free-form text, except `result`, which backends turn
//! into an outcome code instead of rendering it.

mod event;
mod pending;
mod trail;

pub use event::{AuditEvent, AuditOutcome, Identity, RESULT_FAILURE, RESULT_KEY, RESULT_SUCCESS};
pub use pending::PendingAuditEvent;
pub use trail::AuditTrail;
