//! Batch event envelope.
//!
//! The hosting environment delivers a batch as a JSON document whose
//! `Records` each carry one message body (itself a JSON string). Queue
//! semantics — delivery, visibility, redrive — live outside this process.

use propwx_core::MessageError;
use serde::Deserialize;

/// One delivered batch.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueEvent {
    #[serde(rename = "Records")]
    pub records: Vec<QueueRecord>,
}

/// One queue entry within a batch.
#[derive(Debug, Clone, Deserialize)]
pub struct QueueRecord {
    pub body: String,
}

impl QueueEvent {
    /// Decode a batch envelope from its JSON payload.
    ///
    /// # Errors
    /// Returns `MessageError::Decode` if the payload is not a valid
    /// envelope. Record bodies are decoded later, per message.
    pub fn from_json(payload: &str) -> Result<Self, MessageError> {
        serde_json::from_str(payload).map_err(|e| MessageError::Decode(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let payload = r#"{
            "Records": [
                {"body": "{\"property_id\":\"p1\"}"},
                {"body": "{\"property_id\":\"p2\"}"}
            ]
        }"#;

        let event = QueueEvent::from_json(payload).unwrap();
        assert_eq!(event.len(), 2);
        assert!(event.records[0].body.contains("p1"));
    }

    #[test]
    fn test_decode_empty_batch() {
        let event = QueueEvent::from_json(r#"{"Records": []}"#).unwrap();
        assert!(event.is_empty());
    }

    #[test]
    fn test_decode_missing_records_field() {
        let result = QueueEvent::from_json("{}");
        assert!(matches!(result, Err(MessageError::Decode(_))));
    }

    #[test]
    fn test_decode_invalid_json() {
        let result = QueueEvent::from_json("Records");
        assert!(matches!(result, Err(MessageError::Decode(_))));
    }
}
