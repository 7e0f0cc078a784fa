//! Interactive study shell.
//!
//! Reads lines from stdin, turns them into workspace events and prints
//! whatever the workspace publishes. Backend results and reveal ticks are
//! dispatched as they arrive, so answers stream while the shell waits for
//! the next line.

mod command;
mod render;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use command::{HELP, ShellCommand};
use render::TranscriptPrinter;
use studydesk_api::HttpStudyClient;
use studydesk_core::config::Config;
use studydesk_types::{DocumentId, EssayFile, GradedEssay};
use studydesk_workspace::essay::EssayInputMode;
use studydesk_workspace::mode::Mode;
use studydesk_workspace::{EssayCommand, Notice, RuntimeOptions, UiEvent, WorkspaceRuntime};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::{self, error::TryRecvError};

pub struct ShellOptions<'a> {
    pub config: &'a Config,
    pub token_override: Option<String>,
    pub document: Option<DocumentId>,
}

enum Input {
    Line(Option<String>),
    Event(Option<UiEvent>),
}

pub async fn run(options: ShellOptions<'_>) -> Result<()> {
    let ShellOptions {
        config,
        token_override,
        document,
    } = options;

    let base_url = config.api.base_url()?;
    let token = token_override.or_else(|| config.api.resolved_token());
    let client = HttpStudyClient::new(&base_url, token);
    let runtime = WorkspaceRuntime::new(
        Arc::new(client),
        RuntimeOptions {
            reveal_interval: config.workspace.reveal_interval(),
        },
    );

    let mut shell = Shell::new(runtime);
    shell.dispatch(UiEvent::RefreshDocuments);
    shell.settle().await;
    if let Some(document) = document {
        shell.open(document);
    }
    println!("Type :help for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line.context("read stdin")?),
            event = shell.runtime.next_event() => Input::Event(event),
        };

        match input {
            Input::Event(Some(event)) => shell.dispatch(event),
            Input::Event(None) => {}
            Input::Line(None) => {
                shell.settle().await;
                break;
            }
            Input::Line(Some(line)) => match command::parse(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => shell.execute(command).await,
                Err(e) => eprintln!("{e:#}"),
            },
        }
    }

    tracing::info!("study shell closed");
    Ok(())
}

struct Shell {
    runtime: WorkspaceRuntime,
    notices: broadcast::Receiver<Notice>,
    transcript: TranscriptPrinter,
    shown_essay: Option<GradedEssay>,
}

impl Shell {
    fn new(runtime: WorkspaceRuntime) -> Self {
        let notices = runtime.subscribe();
        Self {
            runtime,
            notices,
            transcript: TranscriptPrinter::default(),
            shown_essay: None,
        }
    }

    fn dispatch(&mut self, event: UiEvent) {
        self.runtime.dispatch(event);
        self.render();
    }

    /// Dispatches inbox events until the workspace is idle, rendering
    /// after each one.
    async fn settle(&mut self) {
        while !self.runtime.state.is_idle() {
            if !self.runtime.step().await {
                break;
            }
            self.render();
        }
    }

    fn render(&mut self) {
        loop {
            match self.notices.try_recv() {
                Ok(notice) => render::print_notice(&notice),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "notices dropped");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        let state = &self.runtime.state;
        self.transcript.update(state);
        if state.essay.displayed != self.shown_essay {
            self.shown_essay.clone_from(&state.essay.displayed);
            if let Some(result) = &self.shown_essay {
                render::print_essay(result);
            }
        }
    }

    fn open(&mut self, document: DocumentId) {
        self.dispatch(UiEvent::SelectDocument(document));
        if self.runtime.state.documents.selected == Some(document) {
            render::print_selection(&self.runtime.state);
        }
    }

    async fn execute(&mut self, command: ShellCommand) {
        match command {
            ShellCommand::Empty | ShellCommand::Quit => {}
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Docs => {
                self.dispatch(UiEvent::RefreshDocuments);
                self.settle().await;
                render::print_documents(&self.runtime.state);
            }
            ShellCommand::Filter(category) => {
                self.dispatch(UiEvent::SetCategoryFilter(category));
                render::print_documents(&self.runtime.state);
            }
            ShellCommand::Open(document) => self.open(document),
            ShellCommand::Close => {
                self.dispatch(UiEvent::ClearSelection);
                println!("Selection cleared.");
            }
            ShellCommand::Mode(mode) => {
                self.dispatch(UiEvent::SwitchMode(mode));
                if self.runtime.state.mode == mode {
                    println!("Mode: {mode}");
                    if mode == Mode::Summary {
                        render::print_selection(&self.runtime.state);
                    }
                }
            }
            ShellCommand::Reset => self.dispatch(UiEvent::RequestTutorReset),
            ShellCommand::Answer(accepted) => {
                self.dispatch(UiEvent::ConfirmationAnswered { accepted });
            }
            ShellCommand::EssayText(text) => {
                self.dispatch(UiEvent::Essay(EssayCommand::SetInputMode(
                    EssayInputMode::Type,
                )));
                self.dispatch(UiEvent::Essay(EssayCommand::SetText(text)));
                self.dispatch(UiEvent::Essay(EssayCommand::Submit));
            }
            ShellCommand::EssayFile(path) => match read_essay_file(&path).await {
                Ok(file) => {
                    self.dispatch(UiEvent::Essay(EssayCommand::SetInputMode(
                        EssayInputMode::Upload,
                    )));
                    self.dispatch(UiEvent::Essay(EssayCommand::SelectFile(Some(file))));
                    self.dispatch(UiEvent::Essay(EssayCommand::Submit));
                }
                Err(e) => eprintln!("{e:#}"),
            },
            ShellCommand::EssayClear => self.dispatch(UiEvent::Essay(EssayCommand::Reset)),
            ShellCommand::Attempts => {
                self.dispatch(UiEvent::Essay(EssayCommand::RefreshAttempts));
                self.settle().await;
                render::print_attempts(&self.runtime.state);
            }
            ShellCommand::View(essay) => {
                self.dispatch(UiEvent::Essay(EssayCommand::ViewAttempt(essay)));
            }
            ShellCommand::Quiz => self.dispatch(UiEvent::GenerateQuiz),
            ShellCommand::Delete(document) => {
                self.dispatch(UiEvent::RequestDeleteDocument(document));
            }
            ShellCommand::Send(text) => self.dispatch(UiEvent::SubmitInput(text)),
        }
    }
}

async fn read_essay_file(path: &Path) -> Result<EssayFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read essay file {}", path.display()))?;
    let file_name = path
        .file_name()
        .map_or_else(|| "essay".to_string(), |name| name.to_string_lossy().into_owned());
    Ok(EssayFile {
        file_name,
        mime_type: mime_type_for(path).map(str::to_string),
        bytes,
    })
}

fn mime_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "txt" | "md" => Some("text/plain"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_type_follows_extension() {
        assert_eq!(mime_type_for(Path::new("a/essay.PDF")), Some("application/pdf"));
        assert_eq!(mime_type_for(Path::new("notes.txt")), Some("text/plain"));
        assert_eq!(mime_type_for(Path::new("essay")), None);
        assert_eq!(mime_type_for(Path::new("essay.odt")), None);
    }

    #[tokio::test]
    async fn reads_essay_file_with_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "An essay.").unwrap();

        let file = read_essay_file(&path).await.unwrap();

        assert_eq!(file.file_name, "draft.txt");
        assert_eq!(file.mime_type.as_deref(), Some("text/plain"));
        assert_eq!(file.bytes, b"An essay.");
    }

    #[tokio::test]
    async fn missing_essay_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_essay_file(&dir.path().join("missing.txt"))
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("missing.txt"));
    }
}
