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

//! Integration tests for parity-tsv against the shared fixtures.

use parity_test::{
    functional_candidate_tsv, functional_reference, functional_reference_tsv,
    performance_candidate_tsv, performance_reference_tsv, tsv, FUNCTIONAL_HEADER,
};
use parity_tsv::{
    load_functional, load_performance, parse_bool, performance_from_str, save_table,
    functional_from_str, FromTsvConfig, TsvError,
};
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_reference_fixture_matches_built_table() {
    let loaded = functional_from_str(&functional_reference_tsv()).unwrap();
    let built = functional_reference();

    assert_eq!(loaded.len(), built.len());
    for record in built.records() {
        assert_eq!(loaded.get(&record.name), Some(record), "case {}", record.name);
    }
}

#[test]
fn test_candidate_notes_keep_pipes() {
    let loaded = functional_from_str(&functional_candidate_tsv()).unwrap();
    assert_eq!(loaded.get("lit1").unwrap().notes, "no match | wrong span");
    assert!(loaded.get("bad_class").is_none());
}

#[test]
fn test_load_from_files() {
    let functional = write_temp(&functional_reference_tsv());
    let performance = write_temp(&performance_candidate_tsv());
    let config = FromTsvConfig::default();

    let functional = load_functional(functional.path(), &config).unwrap();
    let performance = load_performance(performance.path(), &config).unwrap();

    assert_eq!(functional.len(), 3);
    let backtrack = performance.get("backtrack").unwrap();
    assert_eq!(backtrack.throughput_mb_s, 0.0);
    assert_eq!(backtrack.status, "TIMEOUT");
    assert_eq!(backtrack.notes, "gave up");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("functional_reference.tsv");

    let err = load_functional(&path, &FromTsvConfig::default()).unwrap_err();
    assert!(matches!(err, TsvError::Io { .. }));
    assert!(err.to_string().contains("functional_reference.tsv"));
}

#[test]
fn test_reordered_and_extra_columns() {
    let text = "status\tnotes\textra\tmatch_ns\tcompile_ns\tname\nPASS\thi\tignored\t5\t6\tx\n";
    let table = functional_from_str(text).unwrap();
    let record = table.get("x").unwrap();
    assert_eq!(record.compile_ns, 6);
    assert_eq!(record.match_ns, 5);
    assert_eq!(record.notes, "hi");
}

#[test]
fn test_crlf_line_endings() {
    let text = functional_reference_tsv().replace('\n', "\r\n");
    let table = functional_from_str(&text).unwrap();
    assert_eq!(table.get("anchor").unwrap().notes, "span ok");
}

#[test]
fn test_blank_lines_are_skipped() {
    let text = format!(
        "{}\n\na\t\t\t\t\t\t\t1\t2\tPASS\t\n\n",
        FUNCTIONAL_HEADER
    );
    let table = functional_from_str(&text).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.diagnostics().rows_read, 1);
}

#[test]
fn test_saved_table_loads_back() {
    let table = performance_from_str(&performance_reference_tsv()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("performance_reference.tsv");

    save_table(&table, &path).unwrap();
    let loaded = load_performance(&path, &FromTsvConfig::default()).unwrap();

    for record in table.records() {
        assert_eq!(loaded.get(&record.name), Some(record));
    }
}

#[test]
fn test_error_names_row_and_field() {
    let text = tsv(
        FUNCTIONAL_HEADER,
        &[
            "a\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\t1\t2\tPASS\t",
            "b\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\t1\t2\tPASS\t",
            "c\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\t1\t2.5\tPASS\t",
        ],
    );
    let err = functional_from_str(&text).unwrap_err();
    assert_eq!(err.row(), Some(3));
    let msg = err.to_string();
    assert!(msg.contains("match_ns"));
    assert!(msg.contains("2.5"));
}

proptest! {
    #[test]
    fn prop_parse_bool_never_panics(s in ".*") {
        let _ = parse_bool(&s);
    }

    #[test]
    fn prop_parse_bool_case_insensitive(token in "(true|yes|1|false|no|0)") {
        prop_assert_eq!(parse_bool(&token), parse_bool(&token.to_uppercase()));
    }

    #[test]
    fn prop_integers_load_exactly(compile in any::<u64>(), matched in any::<u64>()) {
        let text = tsv(
            FUNCTIONAL_HEADER,
            &[&format!("x\t\t\t\t\t\t\t{}\t{}\tPASS\t", compile, matched)],
        );
        let table = functional_from_str(&text).unwrap();
        let record = table.get("x").unwrap();
        prop_assert_eq!(record.compile_ns, compile);
        prop_assert_eq!(record.match_ns, matched);
    }
}
