#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use chrono::Utc;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn jotz_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("jotz"));
    cmd.env("JOTZ_HOME", home.as_os_str())
        .env("NO_COLOR", "1")
        .env_remove("JOTZ_LOG");
    cmd
}

/// A data directory pinned to UTC so "today" is predictable.
fn utc_home() -> TempDir {
    let home = TempDir::new().unwrap();
    jotz_cmd(home.path())
        .args(["config", "utc-offset", "+00:00"])
        .assert()
        .success();
    home
}

fn today_tag() -> String {
    Utc::now().date_naive().format("%Y:%m:%d").to_string()
}

#[test]
fn add_appends_a_framed_record() {
    let home = utc_home();

    jotz_cmd(home.path())
        .args(["add", "Bought", "apples"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry"))
        .stdout(predicate::str::contains("1 record in journal"));

    let journal = fs::read_to_string(home.path().join("journal.txt")).unwrap();
    assert_eq!(journal, format!("\n\n{{Bought apples}}[{}]", today_tag()));
}

#[test]
fn piped_entry_keeps_blank_lines() {
    let home = utc_home();

    jotz_cmd(home.path())
        .arg("add")
        .write_stdin("first paragraph\n\nsecond {braced} paragraph\n")
        .assert()
        .success();

    jotz_cmd(home.path())
        .args(["today", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""body": "first paragraph\n\nsecond {braced} paragraph""#,
        ));
}

#[test]
fn empty_entry_writes_nothing() {
    let home = utc_home();

    jotz_cmd(home.path())
        .arg("add")
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save"));

    assert!(!home.path().join("journal.txt").exists());
}

#[test]
fn search_ranks_and_marks_hits() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("journal.txt"),
        "old apple pie note\n\n{apple pie}[2024:01:01]\n\n{Apple tart and a pie}[2024:01:02]",
    )
    .unwrap();

    jotz_cmd(home.path())
        .args(["search", "apple", "PIE"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[2024:01:02]\n<mark>Apple</mark> tart and a <mark>pie</mark>\n\n\
             [2024:01:01]\n<mark>apple</mark> <mark>pie</mark>\n\n\
             [undated]\nold <mark>apple</mark> <mark>pie</mark> note\n\
             3 records matching apple + pie.\n",
        ));
}

#[test]
fn search_without_hits_warns() {
    let home = TempDir::new().unwrap();
    jotz_cmd(home.path())
        .args(["search", "banana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching records found."));
}

#[test]
fn on_shows_one_day_in_file_order() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("journal.txt"),
        "\n\n{b}[2024:03:01]\n\n{other}[2024:03:02]\n\n{a longer one}[2024:03:01]",
    )
    .unwrap();

    jotz_cmd(home.path())
        .args(["on", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[2024:03:01]\nb\n\n[2024:03:01]\na longer one\n2 records on 2024-03-01.\n",
        ));

    jotz_cmd(home.path())
        .args(["on", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn saved_keywords_drive_fav_searches() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("journal.txt"),
        "\n\n{gym session}[2024:01:01]\n\n{work meeting}[2024:01:01]",
    )
    .unwrap();

    jotz_cmd(home.path())
        .args(["keywords", "--set", "work", "  ", "gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 keywords."));

    assert_eq!(
        fs::read_to_string(home.path().join("keywords.txt")).unwrap(),
        "work\ngym"
    );

    jotz_cmd(home.path())
        .arg("keywords")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. work").and(predicate::str::contains("2. gym")));

    jotz_cmd(home.path())
        .args(["fav", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<mark>gym</mark> session"))
        .stdout(predicate::str::contains("work meeting").not());

    jotz_cmd(home.path())
        .args(["fav", "cooking"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved keyword"));

    jotz_cmd(home.path())
        .args(["keywords", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared saved keywords."));
    assert_eq!(
        fs::read_to_string(home.path().join("keywords.txt")).unwrap(),
        ""
    );
    jotz_cmd(home.path())
        .arg("keywords")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved keywords."));
}

#[test]
fn dedup_rewrites_without_repeats() {
    let home = TempDir::new().unwrap();
    let journal = home.path().join("journal.txt");
    fs::write(
        &journal,
        "\n\n{a}[2024:01:01]\n\n{b}[2024:01:01]\n\n{a}[2024:01:01]",
    )
    .unwrap();

    jotz_cmd(home.path())
        .arg("dedup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 duplicate record"));

    assert_eq!(
        fs::read_to_string(&journal).unwrap(),
        "\n\n{a}[2024:01:01]\n\n{b}[2024:01:01]"
    );
}

#[test]
fn export_copies_raw_text() {
    let home = TempDir::new().unwrap();
    let raw = "legacy line\n\n{a}[2024:01:01]";
    fs::write(home.path().join("journal.txt"), raw).unwrap();

    jotz_cmd(home.path())
        .arg("export")
        .assert()
        .success()
        .stdout(raw);

    let dest = home.path().join("backup.txt");
    jotz_cmd(home.path())
        .args(["export", dest.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dest).unwrap(), raw);
}

#[test]
fn export_of_empty_journal_reports_error() {
    let home = TempDir::new().unwrap();
    jotz_cmd(home.path())
        .arg("export")
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to export"));
}

#[test]
fn config_changes_markers_and_rejects_bad_offsets() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("journal.txt"), "\n\n{apple}[2024:01:01]").unwrap();

    jotz_cmd(home.path())
        .args(["config", "highlight-open", "**"])
        .assert()
        .success();
    jotz_cmd(home.path())
        .args(["config", "highlight-close", "**"])
        .assert()
        .success();

    jotz_cmd(home.path())
        .args(["search", "apple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**apple**"));

    jotz_cmd(home.path())
        .args(["config", "utc-offset", "Mars/Olympus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    jotz_cmd(home.path())
        .args(["config", "utc-offset"])
        .assert()
        .success()
        .stdout("utc-offset = local\n");
}

#[test]
fn list_previews_newest_first() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("journal.txt"),
        "\n\n{older\nentry}[2024:01:01]\n\n{newer}[2024:02:01]",
    )
    .unwrap();

    jotz_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[2024:02:01]  newer\n[2024:01:01]  older entry\n",
        ));
}
