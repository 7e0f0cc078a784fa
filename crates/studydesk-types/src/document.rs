use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend identifier of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub i64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document as listed by `GET /history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_lenient")]
    pub upload_date: Option<DateTime<Utc>>,
}

/// Response of the quiz generation endpoint.
///
/// Older backends answer with `id`, newer ones with `quiz_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCreated {
    #[serde(default)]
    pub quiz_id: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
}

impl QuizCreated {
    /// Returns the quiz id to open, preferring `quiz_id`.
    pub fn playable_id(&self) -> Option<i64> {
        self.quiz_id.or(self.id)
    }
}
