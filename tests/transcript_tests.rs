// Unit tests for the transcript log
//
// These tests verify ordering, timestamp monotonicity, and the clear
// operation over the public TranscriptLog type.

use voicelink::transcript::{TranscriptLog, SYSTEM_SPEAKER};

#[test]
fn test_append_preserves_call_order() {
    let mut log = TranscriptLog::new();

    for i in 0..5 {
        log.append(format!("entry {}", i), "assistant", false);
    }

    let snapshot = log.snapshot();
    assert_eq!(snapshot.len(), 5);
    for (i, entry) in snapshot.iter().enumerate() {
        assert_eq!(entry.text, format!("entry {}", i));
    }
}

#[test]
fn test_append_returns_created_entry() {
    let mut log = TranscriptLog::new();

    let entry = log.append("hello", "You", true);
    assert_eq!(entry.text, "hello");
    assert_eq!(entry.speaker, "You");
    assert!(entry.is_local_user);
    assert_eq!(log.snapshot(), vec![entry]);
}

#[test]
fn test_entry_ids_are_unique() {
    let mut log = TranscriptLog::new();

    for _ in 0..50 {
        log.append("same text", SYSTEM_SPEAKER, false);
    }

    let snapshot = log.snapshot();
    for (i, a) in snapshot.iter().enumerate() {
        for b in snapshot.iter().skip(i + 1) {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn test_timestamps_are_monotonic() {
    let mut log = TranscriptLog::new();

    for _ in 0..100 {
        log.append("tick", "assistant", false);
    }

    let snapshot = log.snapshot();
    for pair in snapshot.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[test]
fn test_clear_empties_log() {
    let mut log = TranscriptLog::new();
    log.append("one", "You", true);
    log.append("two", "assistant", false);
    assert_eq!(log.len(), 2);

    log.clear();

    assert!(log.is_empty());
    assert!(log.snapshot().is_empty());

    // The log stays usable after a clear
    log.append("three", "You", true);
    assert_eq!(log.len(), 1);
}

#[test]
fn test_empty_text_is_kept() {
    let mut log = TranscriptLog::new();

    log.append("", "assistant", false);

    let snapshot = log.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].text, "");
}

#[test]
fn test_snapshot_is_detached() {
    let mut log = TranscriptLog::new();
    log.append("before", "You", true);

    let snapshot = log.snapshot();
    log.append("after", "You", true);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(log.snapshot().len(), 2);
}

#[test]
fn test_entry_serialization() {
    let mut log = TranscriptLog::new();
    let entry = log.append("hello", SYSTEM_SPEAKER, false);

    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains("\"speaker\":\"System\""));
    assert!(json.contains("\"is_local_user\":false"));

    let restored: voicelink::TranscriptEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, entry);
}
