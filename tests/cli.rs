//! End-to-end tests of the zeka binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const NOW: &str = "2020-05-14 08:45:00";

fn zeka(repo: &Path) -> Command {
    let mut cmd = Command::cargo_bin("zeka").unwrap();
    cmd.env_remove("ZEKA_REPOSITORY")
        .env("ZEKA_TIMESTAMP", NOW)
        .arg("--config")
        .arg(repo.join("no-such-config.toml"))
        .arg("--repo")
        .arg(repo);
    cmd
}

#[test]
fn test_note_from_argument() {
    let repo = TempDir::new().unwrap();

    zeka(repo.path())
        .args(["note", "Café: The (Real) Story!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes/020200514084500-Cafe-The-Real_Story.md"));

    let path = repo.path().join("notes/020200514084500-Cafe-The-Real_Story.md");
    assert_eq!(fs::read_to_string(path).unwrap(), "# Café: The (Real) Story!\n\n");
}

#[test]
fn test_note_title_from_prompt() {
    let repo = TempDir::new().unwrap();

    zeka(repo.path())
        .arg("note")
        .write_stdin("Typed title\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Note title"))
        .stdout(predicate::str::contains("020200514084500-Typed_title.md"));
}

#[test]
fn test_cancelled_prompt_creates_nothing() {
    let repo = TempDir::new().unwrap();

    zeka(repo.path())
        .arg("sketch")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!repo.path().join("sketches").exists());
}

#[test]
fn test_reference_from_arguments() {
    let repo = TempDir::new().unwrap();

    zeka(repo.path())
        .args(["reference", "journal-paper", "On Computable Numbers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("references/020200514084500-On_Computable_Numbers.toml"));

    let contents =
        fs::read_to_string(repo.path().join("references/020200514084500-On_Computable_Numbers.toml")).unwrap();
    assert!(contents.contains("type = \"journalPaper\""));
    assert!(contents.contains("title = \"On Computable Numbers\""));
}

#[test]
fn test_follow_link() {
    let repo = TempDir::new().unwrap();
    zeka(repo.path()).args(["note", "Intro"]).assert().success();

    let draft = repo.path().join("draft.md");
    fs::write(&draft, "See [Intro][[020200514084500]] for details\n").unwrap();

    zeka(repo.path())
        .arg("follow")
        .arg(&draft)
        .args(["--offset", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes/020200514084500-Intro.md"));

    zeka(repo.path())
        .arg("follow")
        .arg(&draft)
        .args(["--offset", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No link under the cursor"));
}

#[test]
fn test_follow_ambiguous_link_fails() {
    let repo = TempDir::new().unwrap();
    let notes = repo.path().join("notes");
    fs::create_dir_all(&notes).unwrap();
    fs::write(notes.join("020200514084500-intro.md"), "").unwrap();
    fs::write(notes.join("020200514084500-other.md"), "").unwrap();

    zeka(repo.path())
        .args(["follow", "-", "--offset", "3"])
        .write_stdin("[[020200514084500]]")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("More than one file matches"))
        .stderr(predicate::str::contains("020200514084500-intro.md"))
        .stderr(predicate::str::contains("020200514084500-other.md"));
}

#[test]
fn test_link_picker() {
    let repo = TempDir::new().unwrap();
    zeka(repo.path()).args(["reference", "book", "TAOCP"]).assert().success();

    zeka(repo.path())
        .args(["link", "taocp"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout("{TAOCP}{{020200514084500}}\n");
}

#[test]
fn test_list_json() {
    let repo = TempDir::new().unwrap();
    zeka(repo.path()).args(["note", "Intro"]).assert().success();

    let output = zeka(repo.path()).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries[0]["id"], "020200514084500");
    assert_eq!(entries[0]["label"], "Intro");
    assert_eq!(entries[0]["type"], "note");
}

#[test]
fn test_links_report() {
    let repo = TempDir::new().unwrap();
    zeka(repo.path()).args(["note", "Intro"]).assert().success();

    zeka(repo.path())
        .args(["links", "-"])
        .write_stdin("[[020200514084500]]\n\n{{019800101000000}}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-:1: [[020200514084500]] ->"))
        .stdout(predicate::str::contains("-:3: {{019800101000000}} -> BROKEN"));
}

#[test]
fn test_missing_repository() {
    let repo = TempDir::new().unwrap();
    let missing = repo.path().join("missing");

    zeka(&missing)
        .args(["note", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Zeka repository found"));
}

#[test]
fn test_unset_repository() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("zeka")
        .unwrap()
        .env_remove("ZEKA_REPOSITORY")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["note", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Zeka repository configured"));
}

#[test]
fn test_resolve_rejects_bad_id() {
    let repo = TempDir::new().unwrap();

    zeka(repo.path())
        .args(["resolve", "note", "020201314084500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an object id"));
}
