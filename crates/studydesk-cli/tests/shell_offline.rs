use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

// Nothing listens on the discard port, so every backend call fails fast.
const UNREACHABLE: &str = "http://127.0.0.1:9";

#[test]
fn test_shell_rejects_messages_without_a_document() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("studydesk")
        .env("STUDYDESK_HOME", dir.path())
        .env_remove("STUDYDESK_BASE_URL")
        .args(["--base-url", UNREACHABLE, "shell"])
        .write_stdin(":mode chat\nhello there\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type :help for commands."))
        .stderr(predicate::str::contains("no document selected"));
}

#[test]
fn test_shell_reports_unknown_commands() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("studydesk")
        .env("STUDYDESK_HOME", dir.path())
        .args(["--base-url", UNREACHABLE, "shell"])
        .write_stdin(":frobnicate\n:help\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(":essay file PATH"))
        .stderr(predicate::str::contains("Unknown command ':frobnicate'"));
}

#[test]
fn test_shell_lists_no_documents_when_backend_is_down() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("studydesk")
        .env("STUDYDESK_HOME", dir.path())
        .args(["--base-url", UNREACHABLE, "shell"])
        .write_stdin(":docs\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No documents."));
}

#[test]
fn test_shell_rejects_bad_base_url() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("studydesk")
        .env("STUDYDESK_HOME", dir.path())
        .args(["--base-url", "not a url", "shell"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid api.base_url"));
}
