//! Plain-text rendering of workspace state.

use std::io::{self, Write};

use studydesk_types::GradedEssay;
use studydesk_workspace::documents::category_of;
use studydesk_workspace::essay::{ScoreBand, attempt_titles};
use studydesk_workspace::messages::{Generation, Role, Turn, TurnStatus};
use studydesk_workspace::{Notice, Route, WorkspaceState};

/// Streams the message list, printing each turn once and the turn being
/// revealed character by character.
#[derive(Debug, Default)]
pub struct TranscriptPrinter {
    generation: Option<Generation>,
    printed_turns: usize,
    /// Turn index whose label is out, and how many bytes of it follow.
    partial: Option<(usize, usize)>,
}

impl TranscriptPrinter {
    pub fn update(&mut self, state: &WorkspaceState) {
        let mut stdout = io::stdout().lock();
        let _ = self.write_to(&mut stdout, state);
    }

    pub fn write_to(&mut self, out: &mut impl Write, state: &WorkspaceState) -> io::Result<()> {
        let generation = state.store.generation();
        let turns = state.store.turns();
        if self.generation != Some(generation) || turns.len() < self.printed_turns {
            if self.partial.take().is_some() {
                writeln!(out)?;
            }
            self.generation = Some(generation);
            self.printed_turns = 0;
            if state.mode.is_conversational() {
                writeln!(out, "--- {} ---", state.mode)?;
            }
        }

        let revealing = state.reveal.active().map(|run| run.index);
        for (index, turn) in turns.iter().enumerate().skip(self.printed_turns) {
            let written = match self.partial {
                Some((partial_index, len)) if partial_index == index => len,
                _ => {
                    write!(out, "{}", label(turn))?;
                    0
                }
            };
            write!(out, "{}", turn.text.get(written..).unwrap_or(""))?;

            if revealing == Some(index) {
                self.partial = Some((index, turn.text.len()));
                break;
            }
            writeln!(out)?;
            self.printed_turns = index + 1;
            self.partial = None;
        }
        out.flush()
    }
}

fn label(turn: &Turn) -> String {
    match (turn.role, &turn.status) {
        (Role::User, _) => "you> ".to_string(),
        (Role::Ai, TurnStatus::Neutral) => "ai> ".to_string(),
        (Role::Ai, status) => format!("ai [{}]> ", status.as_str()),
    }
}

pub fn print_notice(notice: &Notice) {
    match notice {
        Notice::MessagesChanged => {}
        Notice::Alert(message) => eprintln!("error: {message}"),
        Notice::ConfirmationRequested(confirmation) => {
            println!("{} (:yes / :no)", confirmation.prompt());
        }
        Notice::Navigate(Route::QuizPlayer { quiz_id }) => {
            println!("Quiz {quiz_id} is ready.");
        }
        Notice::InputRejected(reason) => eprintln!("rejected: {reason}"),
    }
}

pub fn print_documents(state: &WorkspaceState) {
    let visible = state.documents.visible();
    if visible.is_empty() {
        println!("No documents.");
        return;
    }
    for document in visible {
        let marker = if state.documents.selected == Some(document.id) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} {:>4}  {}  [{}]",
            document.id,
            document.filename,
            category_of(document)
        );
    }
}

pub fn print_selection(state: &WorkspaceState) {
    match state.selected_document() {
        Some(document) => {
            println!("Opened {} ({})", document.filename, document.id);
            match document.summary.as_deref() {
                Some(summary) if !summary.trim().is_empty() => println!("{summary}"),
                _ => println!("(no summary yet)"),
            }
        }
        None => println!("No document selected."),
    }
}

pub fn print_attempts(state: &WorkspaceState) {
    let attempts = &state.essay.attempts;
    if attempts.is_empty() {
        println!("No past attempts.");
        return;
    }
    let fallback = state
        .selected_document()
        .map_or("Essay", |document| document.filename.as_str());
    for (attempt, title) in attempts.iter().zip(attempt_titles(attempts, fallback)) {
        let score = attempt
            .score
            .map(|score| format!("{score:.0} ({})", ScoreBand::for_score(score).as_str()))
            .unwrap_or_else(|| "-".to_string());
        let when = attempt
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("{:>4}  {title}  {score}  {when}", attempt.id);
    }
}

pub fn print_essay(result: &GradedEssay) {
    let score = result.clamped_score();
    println!(
        "Score: {score:.0}/100 ({})",
        ScoreBand::for_score(score).as_str()
    );
    if let Some(feedback) = result.feedback.as_deref() {
        println!("{feedback}");
    }
    for strength in &result.strengths {
        println!("  + {strength}");
    }
    for improvement in &result.improvements {
        println!("  - {improvement}");
    }
}

#[cfg(test)]
mod tests {
    use studydesk_types::{Document, DocumentId, HistoryKind};
    use studydesk_workspace::UiEvent;
    use studydesk_workspace::common::{TaskCompleted, TaskKind, TaskStarted};
    use studydesk_workspace::effects::UiEffect;
    use studydesk_workspace::events::{ChatUiEvent, DocumentsUiEvent, HistoryUiEvent};
    use studydesk_workspace::mode::Mode;
    use studydesk_workspace::update::update;

    use super::*;

    fn complete(
        state: &mut WorkspaceState,
        kind: TaskKind,
        task: &TaskStarted,
        result: UiEvent,
    ) -> Vec<UiEffect> {
        update(
            state,
            UiEvent::TaskCompleted {
                kind,
                completed: TaskCompleted {
                    id: task.id,
                    result: Box::new(result),
                },
            },
        )
    }

    fn chat_state() -> WorkspaceState {
        let mut state = WorkspaceState::new();
        let document = Document {
            id: DocumentId(1),
            filename: "notes.pdf".to_string(),
            category: None,
            summary: None,
            upload_date: None,
        };
        update(
            &mut state,
            UiEvent::Documents(DocumentsUiEvent::Loaded(vec![document])),
        );
        update(&mut state, UiEvent::SelectDocument(DocumentId(1)));
        let effects = update(&mut state, UiEvent::SwitchMode(Mode::Chat));
        let (task, generation) = effects
            .iter()
            .find_map(|effect| match effect {
                UiEffect::LoadHistory {
                    task, generation, ..
                } => Some((task.clone(), *generation)),
                _ => None,
            })
            .unwrap();
        complete(
            &mut state,
            TaskKind::History,
            &task,
            UiEvent::History(HistoryUiEvent::Loaded {
                document: DocumentId(1),
                kind: HistoryKind::Chat,
                generation,
                turns: vec![],
            }),
        );
        state
    }

    fn next_tick(effects: &[UiEffect]) -> Option<UiEvent> {
        effects.iter().find_map(|effect| match effect {
            UiEffect::ScheduleRevealTick { run } => Some(UiEvent::RevealTick { run: *run }),
            _ => None,
        })
    }

    #[test]
    fn revealed_reply_gets_one_label() {
        let mut state = chat_state();
        let mut printer = TranscriptPrinter::default();
        let mut out = Vec::new();
        printer.write_to(&mut out, &state).unwrap();

        let effects = update(&mut state, UiEvent::SubmitInput("hello".to_string()));
        printer.write_to(&mut out, &state).unwrap();
        let (task, generation) = effects
            .iter()
            .find_map(|effect| match effect {
                UiEffect::AskDocument {
                    task, generation, ..
                } => Some((task.clone(), *generation)),
                _ => None,
            })
            .unwrap();

        let mut effects = complete(
            &mut state,
            TaskKind::ChatSend,
            &task,
            UiEvent::Chat(ChatUiEvent::Answered {
                generation,
                answer: "Hi".to_string(),
            }),
        );
        printer.write_to(&mut out, &state).unwrap();
        while let Some(tick) = next_tick(&effects) {
            effects = update(&mut state, tick);
            printer.write_to(&mut out, &state).unwrap();
        }
        assert!(!state.is_revealing());

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "--- chat ---\nyou> hello\nai> Hi\n");
    }

    #[test]
    fn printed_turns_are_not_repeated() {
        let mut state = chat_state();
        let mut printer = TranscriptPrinter::default();
        let mut out = Vec::new();

        update(&mut state, UiEvent::SubmitInput("first".to_string()));
        printer.write_to(&mut out, &state).unwrap();
        printer.write_to(&mut out, &state).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("you> first").count(), 1);
    }
}
