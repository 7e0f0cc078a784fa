use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DocumentId;

/// Backend identifier of a graded essay attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EssayId(pub i64);

impl fmt::Display for EssayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry of `GET /essays`. The backend does not filter by document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayRecord {
    pub id: EssayId,
    #[serde(default)]
    pub document_id: Option<DocumentId>,
    #[serde(default)]
    pub document_filename: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// A grading result, either fresh from a submission or loaded as detail
/// of a past attempt.
///
/// Feedback fields the workspace does not interpret are kept in `extra`
/// so the presentation layer can still render them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedEssay {
    #[serde(default)]
    pub id: Option<EssayId>,
    #[serde(default)]
    pub document_id: Option<DocumentId>,
    pub score: f64,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub essay_text: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GradedEssay {
    /// Score clamped into the 0–100 range the backend promises.
    pub fn clamped_score(&self) -> f64 {
        self.score.clamp(0.0, 100.0)
    }
}

/// A file picked for upload grading.
#[derive(Clone, PartialEq, Eq)]
pub struct EssayFile {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for EssayFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EssayFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
