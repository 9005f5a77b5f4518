//! Integration tests for the ea CLI binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const KIRA: &str = "Kira\nHuman\nloyal soldier\n";

fn game() -> Command {
    let mut cmd = Command::cargo_bin("empires-ascent").unwrap();
    cmd.env("RUST_LOG", "info");
    cmd
}

fn session(moves: &str) -> String {
    format!("{KIRA}{moves}")
}

// ---------------------------------------------------------------------------
// character creation
// ---------------------------------------------------------------------------

#[test]
fn creates_character() {
    game()
        .args(["--no-script", "--seed", "1"])
        .write_stdin(session("3\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Enter character name: ")
                .and(predicate::str::contains("Choose species (Human/Twi'lek): "))
                .and(predicate::str::contains("Character Created: Kira, Human")),
        );
}

#[test]
fn input_closed_during_creation_fails() {
    game()
        .arg("--no-script")
        .write_stdin("Kira\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

// ---------------------------------------------------------------------------
// menu loop
// ---------------------------------------------------------------------------

#[test]
fn view_info_then_exit() {
    game()
        .arg("--no-script")
        .write_stdin(session("2\n3\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Current Rank: 1 | Level: 1")
                .and(predicate::str::contains("Name: Kira\nRank: 1\nLevel: 1"))
                .and(predicate::str::contains("Exiting game...")),
        );
}

#[test]
fn invalid_choices_reprompt() {
    game()
        .arg("--no-script")
        .write_stdin(session("9\nattack\n3\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid choice. Try again.")
                .count(2)
                .and(predicate::str::contains("Exiting game...")),
        );
}

#[test]
fn end_of_input_exits_cleanly() {
    game()
        .arg("--no-script")
        .write_stdin(session("2\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting game...").not());
}

#[test]
fn first_mission_is_guard_duty() {
    game()
        .args(["--no-script", "--seed", "7"])
        .write_stdin(session("1\n3\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Mission: Guard an Imperial base")
                .and(predicate::str::contains("Difficulty: 3"))
                .and(
                    predicate::str::contains("Mission Successful!")
                        .or(predicate::str::contains("Mission Failed.")),
                ),
        );
}

#[test]
fn same_seed_same_story() {
    let moves = session("1\n1\n1\n1\n1\n1\n2\n3\n");
    let run = |seed: &str| {
        game()
            .args(["--no-script", "--seed", seed])
            .write_stdin(moves.clone())
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run("42"), run("42"));
}

// ---------------------------------------------------------------------------
// collaborators
// ---------------------------------------------------------------------------

#[test]
fn collaborators_log_to_stderr() {
    game()
        .arg("--no-script")
        .write_stdin(session("1\n3\n"))
        .assert()
        .success()
        .stderr(
            predicate::str::contains("Physics Engine Initialized.")
                .and(predicate::str::contains("Audio Engine Initialized."))
                .and(predicate::str::contains("Playing sound: mission_start.wav"))
                .and(predicate::str::contains("Simulating physics for 0.016 seconds..."))
                .and(predicate::str::contains("Updating audio...")),
        )
        .stdout(predicate::str::contains("Physics Engine").not());
}

#[test]
fn custom_delta_time() {
    game()
        .args(["--no-script", "--delta-time", "0.5"])
        .write_stdin(session("2\n3\n"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Simulating physics for 0.5 seconds..."));
}

#[test]
fn missing_script_is_skipped() {
    let dir = TempDir::new().unwrap();
    game()
        .args(["--script", dir.path().join("absent.py").to_str().unwrap()])
        .write_stdin(session("3\n"))
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped"));
}

#[cfg(unix)]
#[test]
fn startup_script_runs_once() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("npc_behavior.sh");
    fs::write(&script, "echo npc-patrol-online\n").unwrap();

    game()
        .args(["--interpreter", "sh", "--script", script.to_str().unwrap()])
        .write_stdin(session("3\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("npc-patrol-online").count(1));
}

#[cfg(unix)]
#[test]
fn failing_script_does_not_stop_game() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("broken.sh");
    fs::write(&script, "exit 4\n").unwrap();

    game()
        .args(["--interpreter", "sh", "--script", script.to_str().unwrap()])
        .write_stdin(session("2\n3\n"))
        .assert()
        .success()
        .stderr(predicate::str::contains("failed with exit code 4"))
        .stdout(predicate::str::contains("Name: Kira"));
}
