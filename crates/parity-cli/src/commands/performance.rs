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

//! Performance comparison command.

use super::{artifact_name, load, RunOptions};
use crate::error::CliError;
use parity_core::{reconcile_performance, PerformanceReconciliation, PerformanceRecord};
use parity_report::{
    export_json, export_performance_markdown, print_performance_summary, ReconciliationExport,
    ReportInputs, ReportPaths,
};
use std::path::Path;
use tracing::info;

/// Reconciles two performance tables and writes the report.
///
/// # Errors
///
/// Fails when either table cannot be loaded or a report cannot be written.
pub fn performance(
    reference: &Path,
    candidate: &Path,
    output: &Path,
    json: Option<&Path>,
    options: &RunOptions,
) -> Result<PerformanceReconciliation, CliError> {
    let reference_table = load::<PerformanceRecord>(reference, &options.load)?;
    let candidate_table = load::<PerformanceRecord>(candidate, &options.load)?;

    let reconciliation = reconcile_performance(&reference_table, &candidate_table);
    let inputs = ReportInputs::from_tables(&reference_table, &candidate_table);

    let mut config = options.report.clone();
    config.artifacts.performance_reference = artifact_name(reference);
    config.artifacts.performance_candidate = artifact_name(candidate);

    export_performance_markdown(&reconciliation, &inputs, &config, output)?;
    if let Some(json) = json {
        export_json(
            &ReconciliationExport::performance(&reconciliation, &inputs, &config),
            json,
        )?;
    }
    info!(
        scenarios = reconciliation.rows.len(),
        mismatches = reconciliation.mismatches.len(),
        missing = reconciliation.missing.len(),
        report = %output.display(),
        "performance comparison written"
    );

    print_performance_summary(
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
