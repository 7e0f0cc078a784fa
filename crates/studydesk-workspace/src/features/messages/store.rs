//! Ordered conversation turns for the active (document, mode) session.

/// Marks one conversation session. Bumped whenever the document or mode
/// changes so late writes from an older session can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Ai => "ai",
        }
    }
}

/// Tutor verdict attached to a turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TurnStatus {
    #[default]
    Neutral,
    Correct,
    Incorrect,
    Other(String),
}

impl TurnStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "neutral" | "" => TurnStatus::Neutral,
            "correct" => TurnStatus::Correct,
            "incorrect" => TurnStatus::Incorrect,
            _ => TurnStatus::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TurnStatus::Neutral => "neutral",
            TurnStatus::Correct => "correct",
            TurnStatus::Incorrect => "incorrect",
            TurnStatus::Other(label) => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub status: TurnStatus,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            status: TurnStatus::Neutral,
        }
    }

    pub fn ai(text: impl Into<String>, status: TurnStatus) -> Self {
        Self {
            role: Role::Ai,
            text: text.into(),
            status,
        }
    }
}

/// The visible conversation.
///
/// `revision` changes on every mutation; observers compare it to detect
/// that the list needs redrawing.
#[derive(Debug, Default)]
pub struct MessageStore {
    turns: Vec<Turn>,
    generation: Generation,
    revision: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Starts a new session: clears all turns and advances the generation.
    pub fn begin_generation(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.turns.clear();
        self.touch();
        self.generation
    }

    /// Replaces the whole list, if `generation` is still current.
    pub fn replace(&mut self, generation: Generation, turns: Vec<Turn>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.turns = turns;
        self.touch();
        true
    }

    /// Appends a turn and returns its index.
    pub fn push(&mut self, turn: Turn) -> usize {
        self.turns.push(turn);
        self.touch();
        self.turns.len() - 1
    }

    /// Appends `ch` to the turn at `index`, if `generation` is still current
    /// and the index exists.
    pub fn append_char(&mut self, generation: Generation, index: usize, ch: char) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(turn) = self.turns.get_mut(index) else {
            return false;
        };
        turn.text.push(ch);
        self.touch();
        true
    }

    /// Overwrites the text of the turn at `index` under the same guard as
    /// `append_char`.
    pub fn set_text(&mut self, generation: Generation, index: usize, text: &str) -> bool {
        if generation != self.generation {
            return false;
        }
        let Some(turn) = self.turns.get_mut(index) else {
            return false;
        };
        turn.text.clear();
        turn.text.push_str(text);
        self.touch();
        true
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_from_an_old_generation_are_ignored() {
        let mut store = MessageStore::new();
        let old = store.begin_generation();
        let index = store.push(Turn::ai("", TurnStatus::Neutral));

        let current = store.begin_generation();
        assert_ne!(old, current);
        assert!(store.is_empty());

        assert!(!store.append_char(old, index, 'x'));
        assert!(!store.replace(old, vec![Turn::user("stale")]));
        assert!(store.is_empty());
    }

    #[test]
    fn append_char_extends_the_indexed_turn() {
        let mut store = MessageStore::new();
        let generation = store.begin_generation();
        store.push(Turn::user("hi"));
        let index = store.push(Turn::ai("", TurnStatus::Correct));

        assert!(store.append_char(generation, index, 'o'));
        assert!(store.append_char(generation, index, 'k'));
        assert_eq!(store.turns()[index].text, "ok");
        assert_eq!(store.turns()[0].text, "hi");
        assert!(!store.append_char(generation, 9, 'x'));
    }

    #[test]
    fn every_mutation_bumps_revision() {
        let mut store = MessageStore::new();
        let start = store.revision();
        let generation = store.begin_generation();
        let after_begin = store.revision();
        assert_ne!(start, after_begin);

        store.push(Turn::user("a"));
        assert_ne!(after_begin, store.revision());

        let before = store.revision();
        store.set_text(generation, 0, "b");
        assert_ne!(before, store.revision());
        assert_eq!(store.turns()[0].text, "b");
    }

    #[test]
    fn status_labels_are_normalized() {
        assert_eq!(TurnStatus::from_label("Correct"), TurnStatus::Correct);
        assert_eq!(TurnStatus::from_label(" incorrect "), TurnStatus::Incorrect);
        assert_eq!(TurnStatus::from_label(""), TurnStatus::Neutral);
        assert_eq!(
            TurnStatus::from_label("partial").as_str(),
            "partial"
        );
    }
}
