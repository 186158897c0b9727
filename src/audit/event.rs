//! Audit event schema and types.
//!
//! An audit event is an actor identity plus an ordered list of free-form
//! attributes. One attribute name, [`RESULT_KEY`], is reserved for the
//! outcome of the audited operation.

use std::fmt;

/// Attribute name reserved for the outcome of the audited operation.
pub const RESULT_KEY: &str = "result";

/// Value of [`RESULT_KEY`] recorded for a successful operation.
pub const RESULT_SUCCESS: &str = "SUCCESS";

/// Value of [`RESULT_KEY`] recorded for a failed operation.
pub const RESULT_FAILURE: &str = "FAILURE";

/// The actor responsible for an audited action.
///
/// # Example
///
/// ```
/// use audit_backend::audit::Identity;
///
/// let identity = Identity::new(1000, 4242);
/// assert_eq!(identity.uid(), 1000);
/// assert_eq!(identity.pid(), 4242);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    uid: u32,
    pid: u32,
}

impl Identity {
    /// Creates an identity from a user id and a process id.
    pub fn new(uid: u32, pid: u32) -> Self {
        Self { uid, pid }
    }

    /// Returns the user id.
    pub fn uid(&self) -> u32 {
        self.uid
    }

    /// Returns the process id.
    pub fn pid(&self) -> u32 {
        self.pid
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uid={} pid={}", self.uid, self.pid)
    }
}

/// Coarse outcome of an audited operation.
///
/// The discriminants are the result codes understood by the Linux audit
/// facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditOutcome {
    /// Operation failed, or its outcome is unknown
    #[default]
    Failure = 0,
    /// Operation succeeded
    Success = 1,
}

impl AuditOutcome {
    /// Interprets the value of the reserved `result` attribute.
    ///
    /// Only the exact literal `SUCCESS` is a success. Every other value,
    /// including case variants, is a failure.
    ///
    /// ```
    /// use audit_backend::audit::AuditOutcome;
    ///
    /// assert_eq!(AuditOutcome::from_result_value("SUCCESS"), AuditOutcome::Success);
    /// assert_eq!(AuditOutcome::from_result_value("success"), AuditOutcome::Failure);
    /// ```
    pub fn from_result_value(value: &str) -> Self {
        if value == RESULT_SUCCESS {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// Returns the numeric result code (`0` or `1`).
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns the value written under [`RESULT_KEY`] for this outcome.
    pub fn as_result_value(self) -> &'static str {
        match self {
            Self::Success => RESULT_SUCCESS,
            Self::Failure => RESULT_FAILURE,
        }
    }
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::Success => write!(f, "success"),
            AuditOutcome::Failure => write!(f, "failure"),
        }
    }
}

/// A structured audit event.
///
/// Attributes keep their insertion order, which is the order backends render
/// them in. Setting a name that is already present replaces its value without
/// moving it.
///
/// # Example
///
/// ```
/// use audit_backend::audit::{AuditEvent, AuditOutcome, Identity};
///
/// let event = AuditEvent::new(Identity::new(1000, 4242))
///     .with_key("name", "device-1")
///     .with_key("rule", "allow")
///     .with_result(AuditOutcome::Success);
///
/// assert_eq!(event.outcome(), AuditOutcome::Success);
/// assert_eq!(event.get("rule"), Some("allow"));
/// assert_eq!(event.keys().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    identity: Identity,
    keys: Vec<(String, String)>,
}

impl AuditEvent {
    /// Creates an event with no attributes.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            keys: Vec::new(),
        }
    }

    /// Sets an attribute and returns the event.
    pub fn with_key(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_key(name, value);
        self
    }

    /// Sets the reserved `result` attribute and returns the event.
    pub fn with_result(mut self, outcome: AuditOutcome) -> Self {
        self.set_result(outcome);
        self
    }

    /// Sets an attribute.
    ///
    /// An existing attribute with the same name keeps its position and takes
    /// the new value.
    pub fn set_key(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.keys.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.keys.push((name, value)),
        }
    }

    /// Sets the reserved `result` attribute from an outcome.
    pub fn set_result(&mut self, outcome: AuditOutcome) {
        self.set_key(RESULT_KEY, outcome.as_result_value());
    }

    /// Returns the identity of the actor.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns the attributes in insertion order.
    pub fn keys(&self) -> &[(String, String)] {
        &self.keys
    }

    /// Returns the value of an attribute, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.keys
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the outcome recorded under the reserved `result` attribute.
    ///
    /// An event without a `result` attribute is a failure.
    pub fn outcome(&self) -> AuditOutcome {
        self.get(RESULT_KEY)
            .map(AuditOutcome::from_result_value)
            .unwrap_or_default()
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuditEvent[{}", self.identity)?;
        for (name, value) in &self.keys {
            write!(f, ", {}={}", name, value)?;
        }
        write!(f, "]")
    }
}
