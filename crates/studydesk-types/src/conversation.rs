use std::fmt;

use serde::{Deserialize, Serialize};

/// Which persisted conversation a history request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Chat,
    Tutor,
}

impl HistoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryKind::Chat => "chat",
            HistoryKind::Tutor => "tutor",
        }
    }
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role labels the backend stores on persisted turns.
///
/// The set is closed; anything unrecognised is kept as `Other` and shown
/// as assistant output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendRole {
    User,
    /// Student answers inside a tutor session.
    TutorUser,
    #[serde(alias = "assistant", alias = "ai")]
    Model,
    Tutor,
    #[serde(other)]
    Other,
}

impl BackendRole {
    /// Returns true for labels that represent student input.
    pub fn is_user(&self) -> bool {
        matches!(self, BackendRole::User | BackendRole::TutorUser)
    }
}

/// One persisted turn as returned by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTurn {
    pub role: BackendRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorOpening {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorReply {
    pub text: String,
    pub status: String,
    #[serde(default)]
    pub is_finish: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_map_onto_closed_set() {
        let turns: Vec<RawTurn> = serde_json::from_str(
            r#"[
                {"role": "user", "content": "a"},
                {"role": "tutor_user", "content": "b"},
                {"role": "assistant", "content": "c"},
                {"role": "tutor", "content": "d"},
                {"role": "system", "content": "e"}
            ]"#,
        )
        .unwrap();

        let roles: Vec<_> = turns.iter().map(|t| t.role.clone()).collect();
        assert_eq!(
            roles,
            vec![
                BackendRole::User,
                BackendRole::TutorUser,
                BackendRole::Model,
                BackendRole::Tutor,
                BackendRole::Other,
            ]
        );
        assert!(turns[1].role.is_user());
        assert!(!turns[3].role.is_user());
    }

    #[test]
    fn tutor_reply_defaults_is_finish() {
        let reply: TutorReply =
            serde_json::from_str(r#"{"text": "Good", "status": "correct"}"#).unwrap();
        assert!(!reply.is_finish);
    }
}
