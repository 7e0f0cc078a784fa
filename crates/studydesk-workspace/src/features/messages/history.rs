use studydesk_types::{HistoryKind, RawTurn};

use super::codec::decode;
use super::store::{Role, Turn, TurnStatus};

/// A persisted conversation converted to display turns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MappedHistory {
    pub turns: Vec<Turn>,
    /// True when any decoded turn carried the finish flag. Always false
    /// for chat history.
    pub finished: bool,
}

/// Maps backend turns to display turns, preserving order.
///
/// User roles (`user`, `tutor_user`) become `Role::User`; every other label
/// becomes `Role::Ai`.
pub fn map_history(raw: &[RawTurn], kind: HistoryKind) -> MappedHistory {
    let mut finished = false;
    let turns = raw
        .iter()
        .map(|turn| {
            let decoded = decode(&turn.content);
            finished |= decoded.is_finish();
            let (text, status, _) = decoded.into_parts();
            if turn.role.is_user() {
                Turn {
                    role: Role::User,
                    text,
                    status: TurnStatus::Neutral,
                }
            } else {
                Turn::ai(text, status)
            }
        })
        .collect();

    MappedHistory {
        turns,
        finished: kind == HistoryKind::Tutor && finished,
    }
}
