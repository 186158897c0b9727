//! Property tests for message rendering and the Linux backend.
//!
//! These tests validate the record format for arbitrary identities and
//! attribute lists, using a simulated audit facility.

mod common;

use audit_backend::audit::{AuditEvent, AuditOutcome, Identity, RESULT_KEY};
use audit_backend::linux::AuditMessage;
use audit_backend::{AuditBackend, LinuxAuditBackend};
use common::RecordingFacility;
use proptest::prelude::*;

// Strategy: attribute names that are never the reserved key
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_]{1,12}")
        .unwrap()
        .prop_filter("reserved", |name| name != RESULT_KEY)
}

// Strategy: printable attribute values, quotes and spaces included
fn arb_value() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,24}").unwrap()
}

// Strategy: unique attribute names with values, in arbitrary order
fn arb_attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map(arb_name(), arb_value(), 0..8)
        .prop_map(|map| map.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn arb_result_value() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("SUCCESS".to_string()),
        Just("FAILURE".to_string()),
        Just("success".to_string()),
        prop::string::string_regex("[A-Za-z]{0,10}").unwrap(),
    ])
}

fn expected_text(uid: u32, pid: u32, attributes: &[(String, String)]) -> String {
    let mut text = format!("uid={} pid={} ", uid, pid);
    for (name, value) in attributes {
        text.push_str(&format!("{}='{}' ", name, value));
    }
    text
}

proptest! {
    /// Property: an event without attributes renders as the identity only
    #[test]
    fn proptest_identity_only_message(uid in any::<u32>(), pid in any::<u32>()) {
        let message = AuditMessage::render(&AuditEvent::new(Identity::new(uid, pid)));

        prop_assert_eq!(message.text(), format!("uid={} pid={} ", uid, pid));
        prop_assert_eq!(message.outcome().code(), 0);
    }

    /// Property: attributes render in input order and `result` never appears
    ///
    /// The reserved key is inserted at an arbitrary position; the outcome is 1
    /// only for the exact literal `SUCCESS`.
    #[test]
    fn proptest_attributes_render_in_order(
        uid in any::<u32>(),
        pid in any::<u32>(),
        attributes in arb_attributes(),
        result in arb_result_value(),
        result_position in any::<prop::sample::Index>(),
    ) {
        let mut keys = attributes.clone();
        if let Some(value) = &result {
            let position = result_position.index(keys.len() + 1);
            keys.insert(position, (RESULT_KEY.to_string(), value.clone()));
        }

        let event = keys
            .iter()
            .fold(AuditEvent::new(Identity::new(uid, pid)), |event, (name, value)| {
                event.with_key(name.clone(), value.clone())
            });
        let message = AuditMessage::render(&event);

        prop_assert_eq!(message.text(), expected_text(uid, pid, &attributes));

        let expected_outcome = match result.as_deref() {
            Some("SUCCESS") => AuditOutcome::Success,
            _ => AuditOutcome::Failure,
        };
        prop_assert_eq!(message.outcome(), expected_outcome);
    }

    /// Property: writing an event twice submits byte-identical records and
    /// the connection is closed exactly once afterwards
    #[test]
    fn proptest_writes_are_repeatable(
        uid in any::<u32>(),
        pid in any::<u32>(),
        attributes in arb_attributes(),
    ) {
        let event = attributes
            .iter()
            .fold(AuditEvent::new(Identity::new(uid, pid)), |event, (name, value)| {
                event.with_key(name.clone(), value.clone())
            });

        let facility = RecordingFacility::new();
        let mut backend = LinuxAuditBackend::with_facility(facility.clone()).unwrap();
        backend.write(&event).unwrap();
        backend.write(&event).unwrap();
        drop(backend);

        let submissions = facility.submissions();
        prop_assert_eq!(submissions.len(), 2);
        prop_assert_eq!(&submissions[0], &submissions[1]);
        prop_assert_eq!(facility.closes().len(), 1);
    }

    /// Property: open errors keep the OS error code unchanged
    #[test]
    fn proptest_open_error_code_is_preserved(code in 1i32..4096) {
        let facility = RecordingFacility::failing_open(code);

        let err = LinuxAuditBackend::with_facility(facility.clone()).unwrap_err();

        prop_assert_eq!(err.raw_os_error(), Some(code));
        prop_assert_eq!(err.operation(), "open");
        prop_assert!(facility.closes().is_empty());
    }
}
