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

//! Directory-driven comparison of both table kinds.

use super::{functional, performance, RunOptions};
use crate::error::CliError;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const FUNCTIONAL_REFERENCE_FILE: &str = "functional_reference.tsv";
pub const FUNCTIONAL_CANDIDATE_FILE: &str = "functional_candidate.tsv";
pub const PERFORMANCE_REFERENCE_FILE: &str = "performance_reference.tsv";
pub const PERFORMANCE_CANDIDATE_FILE: &str = "performance_candidate.tsv";
pub const FUNCTIONAL_REPORT_FILE: &str = "functionality_comparison.md";
pub const PERFORMANCE_REPORT_FILE: &str = "performance_comparison.md";

fn json_twin(report: &Path) -> PathBuf {
    report.with_extension("json")
}

/// Runs the functional and then the performance comparison for the tables
/// in `results_dir`, writing both reports into the same directory.
///
/// # Errors
///
/// Fails when the directory does not exist, or on the first table or report
/// that fails. A functional failure stops the run before any performance
/// table is read.
pub fn all(results_dir: &Path, json: bool, options: &RunOptions) -> Result<(), CliError> {
    if !results_dir.is_dir() {
        return Err(CliError::invalid_input(format!(
            "Results directory '{}' does not exist",
            results_dir.display()
        )));
    }
    debug!(dir = %results_dir.display(), json, "comparing results directory");

    let functional_report = results_dir.join(FUNCTIONAL_REPORT_FILE);
    let functional_json = json.then(|| json_twin(&functional_report));
    functional(
        &results_dir.join(FUNCTIONAL_REFERENCE_FILE),
        &results_dir.join(FUNCTIONAL_CANDIDATE_FILE),
        &functional_report,
        functional_json.as_deref(),
        options,
    )?;

    let performance_report = results_dir.join(PERFORMANCE_REPORT_FILE);
    let performance_json = json.then(|| json_twin(&performance_report));
    performance(
        &results_dir.join(PERFORMANCE_REFERENCE_FILE),
        &results_dir.join(PERFORMANCE_CANDIDATE_FILE),
        &performance_report,
        performance_json.as_deref(),
        options,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_test::{
        functional_candidate_tsv, functional_reference_tsv, performance_candidate_tsv,
        performance_reference_tsv,
    };
    use std::fs;

    fn populate(dir: &Path) {
        fs::write(dir.join(FUNCTIONAL_REFERENCE_FILE), functional_reference_tsv()).unwrap();
        fs::write(dir.join(FUNCTIONAL_CANDIDATE_FILE), functional_candidate_tsv()).unwrap();
        fs::write(dir.join(PERFORMANCE_REFERENCE_FILE), performance_reference_tsv()).unwrap();
        fs::write(dir.join(PERFORMANCE_CANDIDATE_FILE), performance_candidate_tsv()).unwrap();
    }

    #[test]
    fn test_all_writes_both_reports_and_json() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        all(dir.path(), true, &RunOptions::default()).unwrap();

        for name in [
            FUNCTIONAL_REPORT_FILE,
            PERFORMANCE_REPORT_FILE,
            "functionality_comparison.json",
            "performance_comparison.json",
        ] {
            assert!(dir.path().join(name).exists(), "missing {}", name);
        }
    }

    #[test]
    fn test_all_without_json() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());

        all(dir.path(), false, &RunOptions::default()).unwrap();
        assert!(!dir.path().join("performance_comparison.json").exists());
    }

    #[test]
    fn test_all_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = all(&dir.path().join("nope"), false, &RunOptions::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_functional_failure_stops_before_performance() {
        let dir = tempfile::tempdir().unwrap();
        populate(dir.path());
        fs::remove_file(dir.path().join(FUNCTIONAL_CANDIDATE_FILE)).unwrap();

        assert!(all(dir.path(), false, &RunOptions::default()).is_err());
        assert!(!dir.path().join(PERFORMANCE_REPORT_FILE).exists());
    }
}
