// tests/cli/c2ps_cli.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{HELLO_C, Workspace};

fn c2ps(ws: &Workspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_c2ps"));
    cmd.current_dir(ws.path()).env_remove("C2PS_DEFAULTS");
    cmd
}

#[test]
fn shows_help() {
    c2ps(&Workspace::new())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("c2ps"))
        .stdout(predicate::str::contains("--page-group"));
}

#[test]
fn writes_listing_next_to_first_input() {
    let ws = Workspace::new();
    ws.write_file("hello.c", HELLO_C);

    c2ps(&ws).arg("hello.c").assert().success();

    let ps = ws.read("hello.ps");
    assert!(ps.starts_with("%!PS-Adobe-2.0 EPSF-2.0\n"));
    assert!(ps.contains("%%Title: hello.ps\n"));
    assert!(ps.contains("/ordfn {10 /Times-Roman nf} def\n"));
    assert!(ps.contains("(main)rs\n"));
    assert!(ps.contains("hello \\(world\\)\\\\n"));
    assert!(ps.contains("comfn "));
    assert!(ps.ends_with("%%Trailer\n%%Pages: 1\n"));
}

#[test]
fn writes_to_stdout_with_dash() {
    let ws = Workspace::new();
    ws.write_file("hello.c", HELLO_C);

    c2ps(&ws)
        .args(["-o", "-", "--page-group", "4", "hello.c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("%%EndProlog"))
        .stdout(predicate::str::contains("This Page Intentionally Blank"))
        .stdout(predicate::str::ends_with("%%Pages: 4\n"));
    assert!(!ws.path().join("hello.ps").exists());
}

#[test]
fn reads_plain_text_from_stdin() {
    let ws = Workspace::new();
    c2ps(&ws)
        .args(["-o", "-", "-"])
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("filfn "))
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn skips_missing_input_and_reports_partial_completion() {
    let ws = Workspace::new();
    ws.write_file("good.c", HELLO_C);

    c2ps(&ws)
        .args(["-o", "out.ps", "missing.c", "good.c"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.c"));

    assert!(ws.read("out.ps").contains("%%Pages: 1\n"));
}

#[test]
fn rejects_invalid_page_group() {
    let ws = Workspace::new();
    ws.write_file("hello.c", HELLO_C);

    c2ps(&ws)
        .args(["--page-group", "3", "hello.c"])
        .assert()
        .failure();
    assert!(!ws.path().join("hello.ps").exists());
}

#[test]
fn applies_defaults_from_environment() {
    let ws = Workspace::new();
    ws.write_file("hello.c", HELLO_C);

    c2ps(&ws)
        .env("C2PS_DEFAULTS", "--confidential --fixed -o -")
        .arg("hello.c")
        .assert()
        .success()
        .stdout(predicate::str::contains("(Confidential)rs"))
        .stdout(predicate::str::contains("/ordfn {10 /Courier nf} def"));
}

#[test]
fn command_line_overrides_defaults() {
    let ws = Workspace::new();
    ws.write_file("hello.c", HELLO_C);

    c2ps(&ws)
        .env("C2PS_DEFAULTS", "--fixed -o -")
        .args(["--proportional", "hello.c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/ordfn {10 /Times-Roman nf} def"));
}
