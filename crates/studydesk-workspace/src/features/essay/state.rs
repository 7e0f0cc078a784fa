use std::cmp::Ordering;
use std::collections::HashMap;

use studydesk_types::{DocumentId, EssayFile, EssayRecord, GradedEssay};

use crate::notice::RejectReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EssayInputMode {
    #[default]
    Type,
    Upload,
}

/// What gets sent for grading.
#[derive(Debug, Clone, PartialEq)]
pub enum EssaySubmission {
    Text(String),
    File(EssayFile),
}

#[derive(Debug, Default)]
pub struct EssayState {
    pub input_mode: EssayInputMode,
    pub text: String,
    pub file: Option<EssayFile>,
    /// The single result on screen, fresh or loaded from history.
    pub displayed: Option<GradedEssay>,
    /// Past attempts for the selected document, newest first.
    pub attempts: Vec<EssayRecord>,
}

impl EssayState {
    /// Clears the displayed result and the draft. Past attempts stay.
    pub fn reset(&mut self) {
        self.displayed = None;
        self.text.clear();
        self.file = None;
    }

    /// Validates the draft for the current input mode.
    pub fn submission(&self) -> Result<EssaySubmission, RejectReason> {
        match self.input_mode {
            EssayInputMode::Upload => self
                .file
                .clone()
                .map(EssaySubmission::File)
                .ok_or(RejectReason::MissingFile),
            EssayInputMode::Type if self.text.trim().is_empty() => Err(RejectReason::EmptyEssay),
            EssayInputMode::Type => Ok(EssaySubmission::Text(self.text.clone())),
        }
    }
}

/// Attempts belonging to `document`, newest first. Attempts without a
/// timestamp sort after all dated ones.
pub fn past_attempts_for(document: DocumentId, essays: Vec<EssayRecord>) -> Vec<EssayRecord> {
    let mut attempts: Vec<EssayRecord> = essays
        .into_iter()
        .filter(|essay| essay.document_id == Some(document))
        .collect();
    attempts.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    attempts
}

/// Display titles for `attempts` (newest first), in the same order.
///
/// A filename with a single attempt is shown as is; several attempts of the
/// same file are numbered oldest-first as `"<filename> #n"`.
pub fn attempt_titles(attempts: &[EssayRecord], fallback_name: &str) -> Vec<String> {
    let name_of = |attempt: &EssayRecord| {
        attempt
            .document_filename
            .clone()
            .unwrap_or_else(|| fallback_name.to_string())
    };

    let mut totals: HashMap<String, usize> = HashMap::new();
    for attempt in attempts {
        *totals.entry(name_of(attempt)).or_default() += 1;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    attempts
        .iter()
        .map(|attempt| {
            let name = name_of(attempt);
            let total = totals.get(&name).copied().unwrap_or(1);
            if total <= 1 {
                return name;
            }
            let position = seen.entry(name.clone()).or_default();
            let number = total - *position;
            *position += 1;
            format!("{name} #{number}")
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Good
        } else if score >= 50.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}
