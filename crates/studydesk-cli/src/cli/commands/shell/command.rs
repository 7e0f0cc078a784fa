//! Shell line parsing.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use studydesk_types::{DocumentId, EssayId};
use studydesk_workspace::mode::Mode;

pub const HELP: &str = "\
Commands:
  :docs                 reload and list documents
  :filter [CATEGORY]    list documents in CATEGORY (no argument clears)
  :open ID              select a document
  :close                clear the selection
  :mode NAME            summary | chat | tutor | grader
  :reset                reset the tutor session
  :yes / :no            answer a confirmation
  :essay text TEXT      grade typed essay text
  :essay file PATH      grade an essay file
  :essay clear          clear the essay panel
  :attempts             list past essay attempts
  :view ID              show a past essay attempt
  :quiz                 generate a quiz for the document
  :delete ID            delete a document
  :help                 show this help
  :quit                 leave the shell
Anything else is sent as a message in chat or tutor mode.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Docs,
    Filter(Option<String>),
    Open(DocumentId),
    Close,
    Mode(Mode),
    Reset,
    Answer(bool),
    EssayText(String),
    EssayFile(PathBuf),
    EssayClear,
    Attempts,
    View(EssayId),
    Quiz,
    Delete(DocumentId),
    Help,
    Quit,
    Send(String),
    Empty,
}

pub fn parse(line: &str) -> Result<ShellCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ShellCommand::Empty);
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(ShellCommand::Send(line.to_string()));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name {
        "docs" => ShellCommand::Docs,
        "filter" => ShellCommand::Filter((!arg.is_empty()).then(|| arg.to_string())),
        "open" => ShellCommand::Open(DocumentId(parse_id(arg, "document")?)),
        "close" => ShellCommand::Close,
        "mode" => ShellCommand::Mode(arg.parse()?),
        "reset" => ShellCommand::Reset,
        "yes" | "y" => ShellCommand::Answer(true),
        "no" | "n" => ShellCommand::Answer(false),
        "essay" => parse_essay(arg)?,
        "attempts" => ShellCommand::Attempts,
        "view" => ShellCommand::View(EssayId(parse_id(arg, "essay")?)),
        "quiz" => ShellCommand::Quiz,
        "delete" => ShellCommand::Delete(DocumentId(parse_id(arg, "document")?)),
        "help" | "h" => ShellCommand::Help,
        "quit" | "q" | "exit" => ShellCommand::Quit,
        other => bail!("Unknown command ':{other}' (try :help)"),
    };
    Ok(command)
}

fn parse_essay(arg: &str) -> Result<ShellCommand> {
    let (kind, value) = match arg.split_once(char::is_whitespace) {
        Some((kind, value)) => (kind, value.trim()),
        None => (arg, ""),
    };
    match kind {
        "text" => Ok(ShellCommand::EssayText(value.to_string())),
        "file" if value.is_empty() => bail!("Usage: :essay file PATH"),
        "file" => Ok(ShellCommand::EssayFile(PathBuf::from(value))),
        "clear" => Ok(ShellCommand::EssayClear),
        _ => bail!("Usage: :essay text TEXT | :essay file PATH | :essay clear"),
    }
}

fn parse_id(arg: &str, what: &str) -> Result<i64> {
    if arg.is_empty() {
        bail!("Missing {what} id");
    }
    arg.parse()
        .with_context(|| format!("Invalid {what} id '{arg}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(
            parse("  what is entropy? ").unwrap(),
            ShellCommand::Send("what is entropy?".to_string())
        );
        assert_eq!(parse("   ").unwrap(), ShellCommand::Empty);
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(parse(":open 7").unwrap(), ShellCommand::Open(DocumentId(7)));
        assert_eq!(parse(":mode tutor").unwrap(), ShellCommand::Mode(Mode::Tutor));
        assert_eq!(
            parse(":filter Organic Chemistry").unwrap(),
            ShellCommand::Filter(Some("Organic Chemistry".to_string()))
        );
        assert_eq!(parse(":filter").unwrap(), ShellCommand::Filter(None));
        assert_eq!(parse(":yes").unwrap(), ShellCommand::Answer(true));
        assert_eq!(
            parse(":essay file essays/draft.txt").unwrap(),
            ShellCommand::EssayFile(PathBuf::from("essays/draft.txt"))
        );
        assert_eq!(
            parse(":essay text My essay  body").unwrap(),
            ShellCommand::EssayText("My essay  body".to_string())
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(":open").is_err());
        assert!(parse(":open seven").is_err());
        assert!(parse(":mode quiz").is_err());
        assert!(parse(":essay file").is_err());
        assert!(parse(":frobnicate").is_err());
    }
}
