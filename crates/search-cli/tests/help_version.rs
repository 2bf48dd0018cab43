#![allow(missing_docs)]

mod common;

use common::search_cmd;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_program_help() {
    search_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("duckduckgo"));
}

#[test]
fn help_flag_prints_program_help() {
    for flag in ["-h", "--help"] {
        search_cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("search --version"));
    }
}

#[test]
fn help_flag_before_command_prints_command_help() {
    search_cmd()
        .args(["--help", "grep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search grep <query> [<path>]"));
}

#[test]
fn help_parameter_after_command_prints_command_help() {
    search_cmd()
        .args(["rg", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("search rg <query> [<path>]"));
}

#[test]
fn help_command_prints_command_help() {
    search_cmd()
        .args(["help", "google"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Google"));
}

#[test]
fn version_flag_and_command_agree() {
    let expected = format!("search {}\n", env!("CARGO_PKG_VERSION"));
    search_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(expected.clone());
    search_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(expected);
}
