use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use studydesk_types::HistoryKind;

/// Exactly one mode is active for the selected document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Summary,
    Chat,
    Tutor,
    Grader,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Summary, Mode::Chat, Mode::Tutor, Mode::Grader];

    /// The persisted history behind this mode, if it has a message list.
    pub fn history_kind(self) -> Option<HistoryKind> {
        match self {
            Mode::Chat => Some(HistoryKind::Chat),
            Mode::Tutor => Some(HistoryKind::Tutor),
            Mode::Summary | Mode::Grader => None,
        }
    }

    pub fn is_conversational(self) -> bool {
        self.history_kind().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Summary => "summary",
            Mode::Chat => "chat",
            Mode::Tutor => "tutor",
            Mode::Grader => "grader",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match Mode::ALL.into_iter().find(|mode| mode.as_str() == normalized) {
            Some(mode) => Ok(mode),
            None => bail!("unknown mode '{s}' (expected summary, chat, tutor or grader)"),
        }
    }
}
