//! Tests for ErrorPolicy behavior.

use crate::error::{AggregateError, ErrorPolicy, SinkError};

#[test]
fn error_policy_default_is_accumulate() {
    let policy = ErrorPolicy::default();
    assert_eq!(policy, ErrorPolicy::Accumulate);
}

#[test]
fn error_policy_parse_accepts_aliases() {
    assert_eq!(ErrorPolicy::parse("FAST_FAIL"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::parse("fast-fail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::parse("accumulate"), Some(ErrorPolicy::Accumulate));
    assert_eq!(ErrorPolicy::parse("retry"), None);
}

#[test]
fn aggregate_error_single_and_len() {
    let agg = AggregateError::single(SinkError::not_found("test"));
    assert_eq!(agg.len(), 1);
    assert!(!agg.is_empty());
}

#[test]
fn aggregate_error_from_single() {
    let agg: AggregateError = SinkError::not_found("input").into();
    assert_eq!(agg.len(), 1);
}
