mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn empty_pot_script(settle: &'static [&'static str]) -> tempfile::NamedTempFile {
    let mut rows = common::heads_up();
    rows.push(&["winner", "Bob"]);
    rows.push(settle);
    common::write_script(&rows).unwrap()
}

#[test]
fn test_empty_pot_refused_by_default() {
    let script = empty_pot_script(&["settle"]);

    let mut cmd = Command::new(cargo_bin!("potledger"));
    cmd.arg(script.path()).arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["round_number"], 1);
    assert_eq!(value["selected_winner"], "Bob");
    assert!(value["history"].as_array().unwrap().is_empty());
}

#[test]
fn test_empty_pot_settled_with_assume_yes() {
    let script = empty_pot_script(&["settle"]);

    let mut cmd = Command::new(cargo_bin!("potledger"));
    cmd.arg(script.path()).arg("--confirm").arg("yes");

    // A pass round: nobody pays, the round still advances.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Alice,100,100"))
        .stdout(predicate::str::contains("Bob,100,100"))
        .stdout(predicate::str::contains("1,0,Bob"));
}

#[test]
fn test_script_answer_overrides_flag() {
    let script = empty_pot_script(&["settle", "no"]);

    let mut cmd = Command::new(cargo_bin!("potledger"));
    cmd.arg(script.path()).arg("--confirm").arg("yes");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,0,Bob").not());
}

#[test]
fn test_ask_without_terminal_refuses() {
    let script = empty_pot_script(&["settle"]);

    // No terminal is attached under the test harness, so the dialog
    // cannot be shown and the empty settlement is refused.
    let mut cmd = assert_cmd::Command::new(cargo_bin!("potledger"));
    cmd.arg(script.path()).arg("--confirm").arg("ask");
    cmd.write_stdin("y\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,0,Bob").not());
}

#[test]
fn test_reset_needs_confirmation() {
    let mut rows = common::heads_up();
    rows.push(&["reset"]);
    let script = common::write_script(&rows).unwrap();

    let mut cmd = Command::new(cargo_bin!("potledger"));
    cmd.arg(script.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Alice,100,100"));

    let mut rows = common::heads_up();
    rows.push(&["reset", "yes"]);
    let script = common::write_script(&rows).unwrap();

    let mut cmd = Command::new(cargo_bin!("potledger"));
    cmd.arg(script.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Alice").not());
}
