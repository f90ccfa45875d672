//! Tests for Renderer::display_message.

use std::sync::Arc;

use crate::{InMemorySink, Level, MemoryDiagnostics, Renderer, SinkRegistry, Stage};

fn renderer_with(sinks: &[&InMemorySink]) -> (Renderer, MemoryDiagnostics) {
    let mut registry = SinkRegistry::new();
    for sink in sinks {
        registry.register(Arc::new((*sink).clone()));
    }
    let diagnostics = MemoryDiagnostics::new();
    let renderer = Renderer::with_diagnostics(registry, Arc::new(diagnostics.clone()));
    (renderer, diagnostics)
}

#[test]
fn writes_message_into_existing_sink() {
    let sink = InMemorySink::new("out");
    let (renderer, diagnostics) = renderer_with(&[&sink]);

    renderer.display_message("hi there", "out").expect("display");

    assert_eq!(sink.contents_string(), "hi there");
    assert!(diagnostics.is_empty());
}

#[test]
fn second_call_overwrites_instead_of_appending() {
    let sink = InMemorySink::new("out");
    let (renderer, _) = renderer_with(&[&sink]);

    renderer.display_message("first", "out").unwrap();
    renderer.display_message("second", "out").unwrap();

    assert_eq!(sink.contents_string(), "second");
}

#[test]
fn replaces_prior_content() {
    let sink = InMemorySink::with_text("out", "Old Text with more characters");
    let (renderer, _) = renderer_with(&[&sink]);

    renderer.display_message("new", "out").unwrap();

    assert_eq!(sink.contents_string(), "new");
}

#[test]
fn empty_message_clears_the_sink() {
    let sink = InMemorySink::with_text("out", "something");
    let (renderer, _) = renderer_with(&[&sink]);

    renderer.display_message("", "out").unwrap();

    assert_eq!(sink.contents_string(), "");
}

#[test]
fn missing_target_reports_one_diagnostic_and_mutates_nothing() {
    let a = InMemorySink::with_text("a", "alpha");
    let b = InMemorySink::new("b");
    let (renderer, diagnostics) = renderer_with(&[&a, &b]);

    let err = renderer
        .display_message("lost", "nowhere")
        .expect_err("target should be missing");

    assert!(err.is_target_not_found());
    assert_eq!(err.stage, Stage::Resolve);
    assert_eq!(err.target, "nowhere");

    assert_eq!(a.contents_string(), "alpha");
    assert_eq!(b.contents_string(), "");
    assert_eq!(a.open_count(), 0);
    assert_eq!(b.open_count(), 0);

    let records = diagnostics.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Error);
    assert!(records[0].message.contains("nowhere"));
}

#[test]
fn target_lookup_is_exact() {
    let sink = InMemorySink::new("message");
    let (renderer, _) = renderer_with(&[&sink]);

    assert!(renderer.display_message("x", "Message").is_err());
    assert!(renderer.display_message("x", "message ").is_err());
    assert_eq!(sink.open_count(), 0);
}

#[test]
fn unicode_message_is_written_verbatim() {
    let sink = InMemorySink::new("out");
    let (renderer, _) = renderer_with(&[&sink]);

    renderer.display_message("héllo wörld ✓", "out").unwrap();

    assert_eq!(sink.contents_string(), "héllo wörld ✓");
}

#[test]
fn write_failure_is_reported_with_write_stage() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A directory cannot be opened as a file.
    let sink = crate::FileOutput::named("broken", dir.path().to_path_buf());
    let registry = SinkRegistry::new().with_sink(Arc::new(sink));
    let diagnostics = MemoryDiagnostics::new();
    let renderer = Renderer::with_diagnostics(registry, Arc::new(diagnostics.clone()));

    let err = renderer.display_message("x", "broken").unwrap_err();

    assert_eq!(err.stage, Stage::Write);
    assert!(!err.is_target_not_found());
    assert_eq!(diagnostics.messages_at(Level::Error).len(), 1);
}
