// tests/cli/count_cli.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Workspace;

fn count(ws: &Workspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_count"));
    cmd.current_dir(ws.path());
    cmd
}

#[test]
fn prints_one_row_per_file_and_total() {
    let ws = Workspace::new();
    ws.write_file("a.c", "int x;\n");
    ws.write_file("b.c", "int y;\n\tint z;\n");

    count(&ws)
        .args(["a.c", "b.c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.c    1 page       2 lines      6 max col\n"))
        .stdout(predicate::str::contains("b.c    1 page       3 lines     14 max col\n"))
        .stdout(predicate::str::contains("TOTAL-->    4 pages      5 lines     14 max col\n"));
}

#[test]
fn single_file_has_no_total() {
    let ws = Workspace::new();
    ws.write_file("a.c", "int x;\n");

    count(&ws)
        .args(["--nup", "1", "a.c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTAL-->").not());
}

#[test]
fn ignores_unopenable_files() {
    let ws = Workspace::new();
    ws.write_file("a.c", "int x;\n");

    count(&ws)
        .args(["missing.c", "a.c"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Can't open missing.c"))
        .stdout(predicate::str::contains("a.c"));
}

#[test]
fn emits_json() {
    let ws = Workspace::new();
    let out = count(&ws)
        .args(["--json", "-"])
        .write_stdin("abc\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["nup"], 2);
    assert_eq!(value["files"][0]["name"], "-");
    assert_eq!(value["files"][0]["lines"], 2);
    assert_eq!(value["files"][0]["max_col"], 3);
}

#[test]
fn rejects_unsupported_nup() {
    count(&Workspace::new())
        .args(["--nup", "4", "a.c"])
        .assert()
        .failure();
}
