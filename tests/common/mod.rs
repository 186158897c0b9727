//! Shared test doubles.

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use audit_backend::linux::{AuditFacility, AuditMessage};

/// Everything a [`RecordingFacility`] has been asked to do.
#[derive(Debug, Default)]
pub struct Calls {
    pub opens: usize,
    pub closes: Vec<i32>,
    pub submissions: Vec<(i32, AuditMessage)>,
}

/// Simulated audit facility that records calls and can inject OS errors.
#[derive(Debug, Clone, Default)]
pub struct RecordingFacility {
    calls: Arc<Mutex<Calls>>,
    open_error: Option<i32>,
    submit_error: Option<i32>,
}

impl RecordingFacility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_open(code: i32) -> Self {
        Self {
            open_error: Some(code),
            ..Self::default()
        }
    }

    pub fn failing_submit(code: i32) -> Self {
        Self {
            submit_error: Some(code),
            ..Self::default()
        }
    }

    pub fn opens(&self) -> usize {
        self.calls.lock().unwrap().opens
    }

    pub fn closes(&self) -> Vec<i32> {
        self.calls.lock().unwrap().closes.clone()
    }

    pub fn submissions(&self) -> Vec<(i32, AuditMessage)> {
        self.calls.lock().unwrap().submissions.clone()
    }
}

impl AuditFacility for RecordingFacility {
    type Handle = i32;

    fn open(&self) -> io::Result<i32> {
        let mut calls = self.calls.lock().unwrap();
        calls.opens += 1;
        match self.open_error {
            Some(code) => Err(io::Error::from_raw_os_error(code)),
            None => Ok(100 + calls.opens as i32),
        }
    }

    fn submit(&self, handle: i32, message: &AuditMessage) -> io::Result<()> {
        let mut calls = self.calls.lock().unwrap();
        calls.submissions.push((handle, message.clone()));
        match self.submit_error {
            Some(code) => Err(io::Error::from_raw_os_error(code)),
            None => Ok(()),
        }
    }

    fn close(&self, handle: i32) {
        self.calls.lock().unwrap().closes.push(handle);
    }
}
