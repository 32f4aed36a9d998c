//! CLI integration tests for the phonedig binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// Writes a minimal area code table covering the test numbers.
fn area_code_table() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp tsv");
    for (code, abbrev, name, cities) in [
        (215, "PA", "Pennsylvania", "Philadelphia"),
        (646, "NY", "New York", "New York City"),
    ] {
        writeln!(
            file,
            "{code}\t{abbrev}\t{name}\t{cities}\tUS-{abbrev}\t1"
        )
        .expect("write tsv record");
    }
    file
}

fn phonedig() -> Command {
    Command::cargo_bin("phonedig").expect("binary built")
}

#[test]
fn extracts_from_input_file() {
    let table = area_code_table();
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, "call me at two one five 555 1234 anytime").unwrap();

    phonedig()
        .arg(input.path())
        .arg("--area-codes")
        .arg(table.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2155551234"));
}

#[test]
fn extracts_from_stdin() {
    let table = area_code_table();

    phonedig()
        .arg("--area-codes")
        .arg(table.path())
        .write_stdin("646-555-1234")
        .assert()
        .success()
        .stdout(predicate::eq("6465551234\n"));
}

#[test]
fn empty_input_prints_nothing() {
    let table = area_code_table();

    phonedig()
        .arg("--area-codes")
        .arg(table.path())
        .write_stdin("no numbers in here")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_area_code_table_is_fatal() {
    phonedig()
        .arg("--area-codes")
        .arg("/nonexistent/area_code.tsv")
        .write_stdin("215-555-1234")
        .assert()
        .failure()
        .stderr(predicate::str::contains("area code"));
}

#[test]
fn malformed_area_code_table_is_fatal() {
    let mut table = NamedTempFile::new().unwrap();
    writeln!(table, "215\tPA").unwrap();

    phonedig()
        .arg("--area-codes")
        .arg(table.path())
        .write_stdin("215-555-1234")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn verbose_reports_counts() {
    let table = area_code_table();

    phonedig()
        .arg("--verbose")
        .arg("--area-codes")
        .arg(table.path())
        .write_stdin("215.555.1234 and 646.555.9876")
        .assert()
        .success()
        .stderr(predicate::str::contains("Area codes: 2"))
        .stderr(predicate::str::contains("Found: 2 number(s)"));
}

#[test]
fn unregistered_numbers_are_filtered() {
    let table = area_code_table();

    phonedig()
        .arg("--area-codes")
        .arg(table.path())
        .write_stdin("9995551234 and 2155551234")
        .assert()
        .success()
        .stdout(predicate::eq("2155551234\n"));
}
