// Regex Parity - Reference/Candidate Benchmark Reconciliation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests for the `parity` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use parity_test::{
    functional_candidate_tsv, functional_reference_tsv, performance_candidate_tsv,
    performance_reference_tsv, tsv, FUNCTIONAL_HEADER,
};

fn parity_cmd() -> Command {
    Command::cargo_bin("parity").expect("Failed to find parity binary")
}

// Results directory holding all four fixture tables.
fn results_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write(dir.path(), "functional_reference.tsv", &functional_reference_tsv());
    write(dir.path(), "functional_candidate.tsv", &functional_candidate_tsv());
    write(dir.path(), "performance_reference.tsv", &performance_reference_tsv());
    write(dir.path(), "performance_candidate.tsv", &performance_candidate_tsv());
    dir
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("Failed to write fixture");
}

// ===== Help and Version Tests =====

#[test]
fn test_help_lists_subcommands() {
    parity_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("functional"))
        .stdout(predicate::str::contains("performance"))
        .stdout(predicate::str::contains("all"))
        .stdout(predicate::str::contains("--reference-label"));
}

#[test]
fn test_version_output() {
    parity_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("parity"));
}

#[test]
fn test_no_subcommand_fails() {
    parity_cmd().assert().failure();
}

// ===== All Command Tests =====

#[test]
fn test_all_succeeds_with_mismatches() {
    let dir = results_dir();

    parity_cmd()
        .arg("all")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Functionality comparison complete."))
        .stdout(predicate::str::contains("Functionality mismatches:"))
        .stdout(predicate::str::contains("lit1"))
        .stdout(predicate::str::contains("Performance mismatches:"))
        .stdout(predicate::str::contains("backtrack"));

    let functional = fs::read_to_string(dir.path().join("functionality_comparison.md")).unwrap();
    assert!(functional.contains("- Missing cases: **2** (`bad_class, unicode`)"));
    assert!(functional.contains("no match \\| wrong span"));

    let performance = fs::read_to_string(dir.path().join("performance_comparison.md")).unwrap();
    assert!(performance.contains("| backtrack | PASS | TIMEOUT |"));
    assert!(!dir.path().join("performance_comparison.json").exists());
}

#[test]
fn test_all_with_json_and_labels() {
    let dir = results_dir();

    parity_cmd()
        .args(["--reference-label", "Odin RE2", "--candidate-label", "Rust regex"])
        .arg("all")
        .arg("--results-dir")
        .arg(dir.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Odin RE2 results:"));

    let functional = fs::read_to_string(dir.path().join("functionality_comparison.md")).unwrap();
    assert!(functional.starts_with("# Odin RE2 vs Rust regex – Functionality Comparison"));

    let json = fs::read_to_string(dir.path().join("performance_comparison.json")).unwrap();
    assert!(json.contains("\"reference_label\": \"Odin RE2\""));
}

#[test]
fn test_all_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();

    parity_cmd()
        .arg("all")
        .arg("--results-dir")
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_all_missing_table_fails() {
    let dir = results_dir();
    fs::remove_file(dir.path().join("performance_candidate.tsv")).unwrap();

    parity_cmd()
        .arg("all")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("performance_candidate.tsv"));
}

// ===== Single Comparison Tests =====

#[test]
fn test_functional_subcommand() {
    let dir = results_dir();
    let output = dir.path().join("out.md");

    parity_cmd()
        .arg("functional")
        .arg("--reference")
        .arg(dir.path().join("functional_reference.tsv"))
        .arg("--candidate")
        .arg(dir.path().join("functional_candidate.tsv"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let md = fs::read_to_string(&output).unwrap();
    assert!(md.contains("## Detailed Mismatches"));
    assert!(md.contains("| lit1 | PASS | FAIL | true | false |"));
}

#[test]
fn test_performance_subcommand_with_json() {
    let dir = results_dir();
    let output = dir.path().join("perf.md");
    let json = dir.path().join("perf.json");

    parity_cmd()
        .arg("performance")
        .arg("--reference")
        .arg(dir.path().join("performance_reference.tsv"))
        .arg("--candidate")
        .arg(dir.path().join("performance_candidate.tsv"))
        .arg("-o")
        .arg(&output)
        .arg("--json")
        .arg(&json)
        .assert()
        .success();

    assert!(fs::read_to_string(&output).unwrap().contains("| inf |"));
    assert!(fs::read_to_string(&json).unwrap().contains("\"throughput_ratio\": \"inf\""));
}

// ===== Schema and Policy Tests =====

#[test]
fn test_malformed_integer_names_field() {
    let dir = results_dir();
    write(
        dir.path(),
        "functional_candidate.tsv",
        &tsv(
            FUNCTIONAL_HEADER,
            &["lit1\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\tslow\t2\tPASS\t"],
        ),
    );

    parity_cmd()
        .arg("all")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("compile_ns"))
        .stderr(predicate::str::contains("Row 1"));
}

#[test]
fn test_duplicates_warn_by_default_and_fail_when_rejected() {
    let dir = results_dir();
    let duplicated = tsv(
        FUNCTIONAL_HEADER,
        &[
            "lit1\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\t1\t2\tPASS\tfirst",
            "lit1\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\t1\t2\tPASS\tsecond",
        ],
    );
    write(dir.path(), "functional_candidate.tsv", &duplicated);

    parity_cmd()
        .arg("all")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success();
    let md = fs::read_to_string(dir.path().join("functionality_comparison.md")).unwrap();
    assert!(md.contains("## Input Warnings"));
    assert!(md.contains("duplicate names overwritten by a later row (`lit1`)"));

    parity_cmd()
        .arg("--reject-duplicates")
        .arg("all")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate name 'lit1'"));
}

#[test]
fn test_row_limit_from_environment() {
    let dir = results_dir();

    parity_cmd()
        .env("PARITY_MAX_ROWS", "2")
        .arg("all")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row limit exceeded"));
}
