//! Structured message envelope.
//!
//! Tutor and AI turns may arrive as a JSON object
//! `{"text": .., "status": .., "is_finish": ..}`. Anything that does not
//! parse as such an object is plain text.

use serde::Deserialize;
use serde_json::json;

use super::store::TurnStatus;

#[derive(Debug, Deserialize)]
struct WireEnvelope {
    text: String,
    status: String,
    #[serde(default)]
    is_finish: Option<bool>,
}

/// Result of decoding one stored message content string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedContent {
    Plain(String),
    Structured {
        text: String,
        status: TurnStatus,
        is_finish: bool,
    },
}

impl DecodedContent {
    pub fn text(&self) -> &str {
        match self {
            DecodedContent::Plain(text) | DecodedContent::Structured { text, .. } => text,
        }
    }

    pub fn status(&self) -> TurnStatus {
        match self {
            DecodedContent::Plain(_) => TurnStatus::Neutral,
            DecodedContent::Structured { status, .. } => status.clone(),
        }
    }

    pub fn is_finish(&self) -> bool {
        matches!(self, DecodedContent::Structured { is_finish: true, .. })
    }

    pub fn into_parts(self) -> (String, TurnStatus, bool) {
        match self {
            DecodedContent::Plain(text) => (text, TurnStatus::Neutral, false),
            DecodedContent::Structured {
                text,
                status,
                is_finish,
            } => (text, status, is_finish),
        }
    }
}

/// Decodes a stored content string. Never fails.
pub fn decode(raw: &str) -> DecodedContent {
    match serde_json::from_str::<WireEnvelope>(raw) {
        Ok(envelope) => DecodedContent::Structured {
            text: envelope.text,
            status: TurnStatus::from_label(&envelope.status),
            is_finish: envelope.is_finish.unwrap_or(false),
        },
        Err(_) => DecodedContent::Plain(raw.to_string()),
    }
}

/// Encodes a structured envelope in the backend's format.
pub fn encode(text: &str, status: &TurnStatus, is_finish: bool) -> String {
    json!({
        "text": text,
        "status": status.as_str(),
        "is_finish": is_finish,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_envelope_is_decoded() {
        let decoded = decode(r#"{"text":"Q1: what is 2+2?","status":"neutral","is_finish":false}"#);
        assert_eq!(
            decoded,
            DecodedContent::Structured {
                text: "Q1: what is 2+2?".to_string(),
                status: TurnStatus::Neutral,
                is_finish: false,
            }
        );
    }

    #[test]
    fn missing_finish_flag_defaults_to_false() {
        let decoded = decode(r#"{"text":"Right!","status":"correct"}"#);
        assert_eq!(decoded.status(), TurnStatus::Correct);
        assert!(!decoded.is_finish());
    }

    #[test]
    fn non_object_content_is_plain() {
        assert_eq!(decode("Hello"), DecodedContent::Plain("Hello".to_string()));
        assert_eq!(
            decode("\"Hello\""),
            DecodedContent::Plain("\"Hello\"".to_string())
        );
        assert_eq!(decode("42"), DecodedContent::Plain("42".to_string()));
    }

    #[test]
    fn object_without_required_fields_is_plain() {
        let raw = r#"{"answer":"no text field"}"#;
        assert_eq!(decode(raw), DecodedContent::Plain(raw.to_string()));

        let raw = r#"{"text":"no status"}"#;
        assert_eq!(decode(raw), DecodedContent::Plain(raw.to_string()));
    }

    #[test]
    fn unknown_status_label_is_preserved() {
        let decoded = decode(r#"{"text":"Almost","status":"partial"}"#);
        assert_eq!(decoded.status(), TurnStatus::Other("partial".to_string()));
    }

    #[test]
    fn encoded_envelope_decodes_to_same_fields() {
        let raw = encode("Done", &TurnStatus::Incorrect, true);
        let (text, status, is_finish) = decode(&raw).into_parts();
        assert_eq!(text, "Done");
        assert_eq!(status, TurnStatus::Incorrect);
        assert!(is_finish);
    }
}
