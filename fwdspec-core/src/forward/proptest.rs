//! Property-based tests for the forward codec.
//!
//! These tests use proptest to verify:
//! - Every accepted input renders back to itself
//! - Inputs without exactly three segments always fail with `WrongPartCount`
//! - A numeric second segment always fails with `ServiceNameMustNotBeNumeric`
//! - Non-numeric port segments fail with the matching port error
//! - Labels never change the scalar form

#![cfg(test)]

use proptest::prelude::*;

use super::{GlobalForward, parse, render};
use crate::error::ForwardErrorKind;

// =============================================================================
// Arbitrary Generators
// =============================================================================

fn arb_service_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.-]{0,20}"
}

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z][a-z_-]{0,8}"
}

prop_compose! {
    fn arb_forward_text()(
        local in 1u16..,
        service in arb_service_name(),
        remote in 1u16..,
    ) -> String {
        format!("{local}:{service}:{remote}")
    }
}

prop_compose! {
    fn arb_labels()(
        labels in prop::collection::vec((arb_word(), "[ -~]{0,12}"), 1..5),
    ) -> Vec<(String, String)> {
        labels
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn roundtrip_valid_forward(text in arb_forward_text()) {
        let fwd = parse(&text).unwrap();
        prop_assert_eq!(render(&fwd), text);
    }

    #[test]
    fn render_of_accepted_input_is_identity(text in "[0-9a-z:+-]{0,16}") {
        if let Ok(fwd) = parse(&text) {
            prop_assert_eq!(render(&fwd), text);
        }
    }

    #[test]
    fn parse_never_panics(text in any::<String>()) {
        let _ = parse(&text);
    }

    #[test]
    fn wrong_segment_count_rejected(
        segments in prop::collection::vec("[a-z0-9]{0,6}", 1..8)
            .prop_filter("not three segments", |s| s.len() != 3),
    ) {
        let text = segments.join(":");
        prop_assert_eq!(parse(&text).unwrap_err().kind(), ForwardErrorKind::WrongPartCount);
    }

    #[test]
    fn numeric_service_rejected(
        local in 1u16..,
        service in "[+-]?[0-9]{1,12}",
        remote in "[a-z0-9]{1,6}",
    ) {
        let text = format!("{local}:{service}:{remote}");
        prop_assert_eq!(
            parse(&text).unwrap_err().kind(),
            ForwardErrorKind::ServiceNameMustNotBeNumeric
        );
    }

    #[test]
    fn non_numeric_local_port_rejected(
        local in "[a-z][a-z0-9]{0,6}",
        service in arb_service_name(),
        remote in 1u16..,
    ) {
        let text = format!("{local}:{service}:{remote}");
        prop_assert_eq!(parse(&text).unwrap_err().kind(), ForwardErrorKind::InvalidLocalPort);
    }

    #[test]
    fn non_numeric_remote_port_rejected(
        local in 1u16..,
        service in arb_service_name(),
        remote in "[a-z][a-z0-9]{0,6}",
    ) {
        let text = format!("{local}:{service}:{remote}");
        prop_assert_eq!(parse(&text).unwrap_err().kind(), ForwardErrorKind::InvalidRemotePort);
    }

    #[test]
    fn equal_ports_accepted(port in 1u16.., service in arb_service_name()) {
        let fwd = parse(&format!("{port}:{service}:{port}")).unwrap();
        prop_assert_eq!(fwd.local(), fwd.remote());
    }

    #[test]
    fn labels_do_not_affect_render(text in arb_forward_text(), labels in arb_labels()) {
        let plain = parse(&text).unwrap();
        let labelled = labels
            .into_iter()
            .fold(plain.clone(), |fwd, (k, v)| fwd.with_label(k, v));
        prop_assert_eq!(render(&labelled), render(&plain));
    }

    #[test]
    fn new_agrees_with_parse(local in any::<u16>(), service in "[ -~]{0,10}", remote in any::<u16>()) {
        let text = format!("{local}:{service}:{remote}");
        match (GlobalForward::new(local, &service, remote), parse(&text)) {
            (Ok(built), Ok(parsed)) => prop_assert_eq!(built, parsed),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (built, parsed) => prop_assert!(false, "new: {built:?}, parse: {parsed:?}"),
        }
    }
}
