use voicelink::protocol::{decode, DecodeError, InboundDataEvent};

#[test]
fn test_transcription_roundtrip() {
    let payload = serde_json::json!({
        "type": "transcription",
        "text": "hello",
        "senderIdentity": "assistant-1",
    });
    let bytes = serde_json::to_vec(&payload).unwrap();

    let event = decode(&bytes).unwrap();
    assert!(event.is_transcription());
    assert_eq!(event.text.as_deref(), Some("hello"));
    assert_eq!(event.sender_identity.as_deref(), Some("assistant-1"));
}

#[test]
fn test_decode_is_deterministic() {
    let bytes = br#"{"type":"transcription","text":"again"}"#;

    let first = decode(bytes).unwrap();
    let second = decode(bytes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_decode_rejects_invalid_utf8() {
    let bytes = [0xff, 0xfe, 0x00, 0x9f];
    assert_eq!(decode(&bytes), Err(DecodeError::MalformedPayload));
}

#[test]
fn test_decode_rejects_non_json() {
    assert_eq!(decode(b"not json at all"), Err(DecodeError::MalformedPayload));
}

#[test]
fn test_decode_rejects_json_array() {
    assert_eq!(decode(b"[1, 2, 3]"), Err(DecodeError::MalformedPayload));
}

#[test]
fn test_decode_rejects_json_scalar() {
    assert_eq!(decode(b"\"transcription\""), Err(DecodeError::MalformedPayload));
}

#[test]
fn test_decode_requires_type_field() {
    assert_eq!(decode(b"{}"), Err(DecodeError::MissingType));
    assert_eq!(
        decode(br#"{"text": "orphaned"}"#),
        Err(DecodeError::MissingType)
    );
}

#[test]
fn test_decode_rejects_non_string_type() {
    assert_eq!(decode(br#"{"type": 42}"#), Err(DecodeError::MissingType));
}

#[test]
fn test_unrecognized_type_decodes_successfully() {
    // Forward compatibility: unknown event types are not an error, the
    // caller just skips them
    let event = decode(br#"{"type": "metrics", "cpu": 0.5}"#).unwrap();
    assert!(!event.is_transcription());
    assert_eq!(event.event_type, "metrics");
}

#[test]
fn test_decode_ignores_unknown_fields() {
    let bytes = br#"{"type": "transcription", "text": "hi", "volume": 3, "nested": {"a": 1}}"#;
    let event = decode(bytes).unwrap();
    assert_eq!(event.text.as_deref(), Some("hi"));
}

#[test]
fn test_decode_accepts_snake_case_sender() {
    let event = decode(br#"{"type": "transcription", "text": "x", "sender_identity": "agent"}"#)
        .unwrap();
    assert_eq!(event.sender_identity.as_deref(), Some("agent"));
}

#[test]
fn test_decode_transcription_without_sender() {
    let event = decode(br#"{"type": "transcription", "text": "local speech"}"#).unwrap();
    assert!(event.is_transcription());
    assert_eq!(event.sender_identity, None);
}

#[test]
fn test_serialize_uses_wire_spelling() {
    let event = InboundDataEvent {
        event_type: "transcription".to_string(),
        text: Some("hello".to_string()),
        sender_identity: Some("assistant-1".to_string()),
    };

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"transcription\""));
    assert!(json.contains("\"senderIdentity\":\"assistant-1\""));
}
