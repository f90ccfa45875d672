//! Tests for SinkError and AggregateError formatting.

use crate::error::{AggregateError, ConfigError, SinkError, Stage};

#[test]
fn aggregate_error_display_includes_count() {
    let e1 = SinkError::not_found("a");
    let e2 = SinkError {
        stage: Stage::Write,
        target: "b".to_string(),
        error: Box::new(std::io::Error::other("e2")),
    };

    let agg = AggregateError {
        errors: vec![e1, e2],
    };

    let s = format!("{}", agg);
    assert!(s.contains("2 error(s)"));
    assert!(s.contains("#1: [Resolve] a"));
    assert!(s.contains("#2: [Write] b: e2"));
}

#[test]
fn not_found_error_names_the_target() {
    let err = SinkError::not_found("message");

    assert!(err.is_target_not_found());
    assert_eq!(err.to_string(), "[Resolve] message: element not found: 'message'");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn config_errors_convert_into_config_stage() {
    let err: SinkError = ConfigError::InvalidPolicy("x".into()).into();

    assert_eq!(err.stage, Stage::Config);
    assert!(!err.is_target_not_found());

    let agg: AggregateError = ConfigError::UnsupportedFormat("ini".into()).into();
    assert_eq!(agg.len(), 1);
}
