use super::events::InboundDataEvent;
use serde_json::Value;
use thiserror::Error;

/// Why a data-channel payload could not be decoded
///
/// Always non-fatal: the caller logs and drops the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Payload is not a UTF-8 encoded JSON object
    #[error("malformed data payload: not a UTF-8 JSON object")]
    MalformedPayload,

    /// Payload decoded to an object without a `type` field
    #[error("data payload has no type field")]
    MissingType,
}

/// Decode a raw data-channel payload into a typed event
///
/// Pure: no side effects, same bytes always yield the same result.
pub fn decode(bytes: &[u8]) -> Result<InboundDataEvent, DecodeError> {
    // serde_json validates UTF-8 along with the JSON grammar
    let value: Value =
        serde_json::from_slice(bytes).map_err(|_| DecodeError::MalformedPayload)?;

    let object = value.as_object().ok_or(DecodeError::MalformedPayload)?;

    match object.get("type") {
        Some(Value::String(_)) => {}
        _ => return Err(DecodeError::MissingType),
    }

    serde_json::from_value(value).map_err(|_| DecodeError::MalformedPayload)
}
