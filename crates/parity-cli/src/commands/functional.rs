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

//! Functional comparison command.

use super::{artifact_name, load, RunOptions};
use crate::error::CliError;
use parity_core::{reconcile_functional, FunctionalReconciliation, FunctionalRecord};
use parity_report::{
    export_functional_markdown, export_json, print_functional_summary, ReconciliationExport,
    ReportInputs, ReportPaths,
};
use std::path::Path;
use tracing::info;

/// Reconciles two functional tables and writes the report.
///
/// Returns the reconciliation so callers can inspect the divergence. The
/// report is written even when the sources disagree.
///
/// # Errors
///
/// Fails when either table cannot be loaded or a report cannot be written.
pub fn functional(
    reference: &Path,
    candidate: &Path,
    output: &Path,
    json: Option<&Path>,
    options: &RunOptions,
) -> Result<FunctionalReconciliation, CliError> {
    let reference_table = load::<FunctionalRecord>(reference, &options.load)?;
    let candidate_table = load::<FunctionalRecord>(candidate, &options.load)?;

    let reconciliation = reconcile_functional(&reference_table, &candidate_table);
    let inputs = ReportInputs::from_tables(&reference_table, &candidate_table);

    let mut config = options.report.clone();
    config.artifacts.functional_reference = artifact_name(reference);
    config.artifacts.functional_candidate = artifact_name(candidate);

    export_functional_markdown(&reconciliation, &inputs, &config, output)?;
    if let Some(json) = json {
        export_json(
            &ReconciliationExport::functional(&reconciliation, &inputs, &config),
            json,
        )?;
    }
    info!(
        mismatches = reconciliation.mismatches.len(),
        missing = reconciliation.missing.len(),
        report = %output.display(),
        "functional comparison written"
    );

    print_functional_summary(
        &reconciliation,
        &config,
        &ReportPaths {
            reference,
            candidate,
            report: output,
            json,
        },
    );
    Ok(reconciliation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_test::{functional_candidate_tsv, functional_reference_tsv};
    use std::fs;

    #[test]
    fn test_functional_writes_report_with_mismatches() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("ref.tsv");
        let candidate = dir.path().join("cand.tsv");
        let output = dir.path().join("report.md");
        fs::write(&reference, functional_reference_tsv()).unwrap();
        fs::write(&candidate, functional_candidate_tsv()).unwrap();

        let result =
            functional(&reference, &candidate, &output, None, &RunOptions::default()).unwrap();

        assert_eq!(result.mismatches.len(), 1);
        assert_eq!(result.missing, vec!["bad_class", "unicode"]);
        let md = fs::read_to_string(&output).unwrap();
        assert!(md.contains("- `ref.tsv` – raw Reference results"));
        assert!(md.contains("| lit1 | PASS | FAIL | true | false |"));
    }

    #[test]
    fn test_functional_missing_input_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.tsv");
        let output = dir.path().join("report.md");

        let err = functional(&missing, &missing, &output, None, &RunOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("absent.tsv"));
        assert!(!output.exists());
    }
}
