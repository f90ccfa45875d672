//! Tests for the in-memory sink.

use std::io::Write;

use crate::{InMemorySink, OutputTarget};

#[test]
fn open_overwrite_discards_previous_content() {
    let sink = InMemorySink::with_text("out", "abc");

    {
        let mut w = sink.open_overwrite().unwrap();
        w.write_all(b"de").unwrap();
        w.write_all(b"f").unwrap();
    }

    assert_eq!(sink.contents(), b"def".to_vec());
    assert_eq!(sink.open_count(), 1);
}

#[test]
fn clones_share_the_buffer() {
    let sink = InMemorySink::new("out");
    let handle = sink.clone();

    sink.replace_text("shared").unwrap();

    assert_eq!(handle.contents_string(), "shared");
    assert_eq!(handle.id(), "out");

    handle.clear();
    assert_eq!(sink.contents_string(), "");
}

#[test]
fn open_count_tracks_opens_not_bytes() {
    let sink = InMemorySink::new("out");

    drop(sink.open_overwrite().unwrap());
    assert_eq!(sink.open_count(), 1);
    assert_eq!(sink.contents_string(), "");

    sink.replace_text("one").unwrap();
    assert_eq!(sink.open_count(), 2);
}
