use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

fn loose() -> Command {
    Command::cargo_bin("loose").expect("loose binary")
}

#[test]
fn dump_tokens_as_text() {
    let file = source_file("f(x)\n");
    loose()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0:1 ident \"f\"").and(predicate::str::contains(
            "0:5 newline \"\\n\"",
        )));
}

#[test]
fn dump_tokens_of_single_line() {
    let file = source_file("first(a)\n  second(b)\nthird()\n");
    loose()
        .arg("tokens")
        .arg(file.path())
        .arg("--line")
        .arg("2")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1:3 ident \"second\"")
                .and(predicate::str::contains("first").not())
                .and(predicate::str::contains("third").not()),
        );
}

#[test]
fn dump_tokens_rejects_line_zero() {
    let file = source_file("f()\n");
    loose()
        .arg("tokens")
        .arg(file.path())
        .arg("--line")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line numbers start at 1"));
}

#[test]
fn parse_as_treeviz() {
    let file = source_file("f(g(x))\n");
    loose()
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ƒ $2 f(g(x))").and(predicate::str::contains("◦ $0 x")));
}

#[test]
fn parse_as_json() {
    let file = source_file("go()");
    loose()
        .arg("parse")
        .arg(file.path())
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"term_type\": \"function_call\""));
}

#[test]
fn parse_failure_exits_nonzero() {
    let file = source_file(")");
    loose()
        .arg("parse")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected token rparen"));
}

#[test]
fn unknown_format_is_reported() {
    let file = source_file("f()");
    loose()
        .arg("parse")
        .arg(file.path())
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format: xml"));
}
