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

//! Markdown export for reconciliation reports.

use crate::error::{ReportError, Result};
use crate::types::{ReportConfig, ReportInputs};
use parity_core::{
    format_ratio, FunctionalReconciliation, PerformanceReconciliation, TableDiagnostics,
};
use std::fs;
use std::path::Path;
use tracing::debug;

const ARTIFACT_FOOTER: &str = "> These TSV files use tab delimiters and UTF-8 encoding.\n";

/// Escapes `|` so free text cannot break a table row.
///
/// ```
/// use parity_report::escape_pipe;
///
/// assert_eq!(escape_pipe("a|b"), "a\\|b");
/// assert_eq!(escape_pipe("plain"), "plain");
/// ```
pub fn escape_pipe(value: &str) -> String {
    value.replace('|', "\\|")
}

fn cell(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        escape_pipe(value)
    }
}

fn notes_cell(config: &ReportConfig, reference: &str, candidate: &str) -> String {
    format!(
        "{}: {} / {}: {}",
        escape_pipe(&config.reference_label),
        cell(reference),
        escape_pipe(&config.candidate_label),
        cell(candidate)
    )
}

fn push_header(md: &mut String, title: &str, timestamp: &str) {
    md.push_str(&format!("# {}\n\n", title));
    md.push_str(&format!("_Generated on {}_\n\n", timestamp));
}

fn push_missing(md: &mut String, noun: &str, missing: &[String]) {
    if !missing.is_empty() {
        md.push_str(&format!(
            "- Missing {}: **{}** (`{}`)\n",
            noun,
            missing.len(),
            missing.join(", ")
        ));
    }
}

fn push_source_warnings(md: &mut String, label: &str, diagnostics: &TableDiagnostics) {
    if diagnostics.coerced_booleans > 0 {
        md.push_str(&format!(
            "- {}: **{}** unrecognized boolean values read as `false`\n",
            label, diagnostics.coerced_booleans
        ));
    }
    if !diagnostics.duplicate_names.is_empty() {
        md.push_str(&format!(
            "- {}: **{}** duplicate names overwritten by a later row (`{}`)\n",
            label,
            diagnostics.duplicate_names.len(),
            diagnostics.duplicate_names.join(", ")
        ));
    }
}

fn push_warnings(md: &mut String, inputs: &ReportInputs, config: &ReportConfig) {
    if !inputs.has_warnings() {
        return;
    }
    md.push_str("## Input Warnings\n\n");
    push_source_warnings(md, &config.reference_label, &inputs.reference);
    push_source_warnings(md, &config.candidate_label, &inputs.candidate);
    md.push('\n');
}

fn push_artifacts(md: &mut String, config: &ReportConfig, reference: &str, candidate: &str) {
    md.push_str("## Data Artifacts\n");
    md.push_str(&format!(
        "- `{}` – raw {} results\n",
        reference, config.reference_label
    ));
    md.push_str(&format!(
        "- `{}` – raw {} results\n\n",
        candidate, config.candidate_label
    ));
    md.push_str(ARTIFACT_FOOTER);
}

/// Renders the functional divergence document.
pub fn render_functional(
    reconciliation: &FunctionalReconciliation,
    inputs: &ReportInputs,
    config: &ReportConfig,
) -> String {
    let r = &config.reference_label;
    let c = &config.candidate_label;
    let summary = &reconciliation.summary;
    let mut md = String::new();

    push_header(&mut md, &config.functional_title(), &config.timestamp);

    md.push_str("## Summary\n");
    md.push_str(&format!("- Total cases: **{}**\n", summary.total_cases));
    md.push_str(&format!("- Aligned cases: **{}**\n", summary.aligned_cases));
    md.push_str(&format!("- {} passes: **{}**\n", r, summary.reference_passes));
    md.push_str(&format!("- {} passes: **{}**\n", c, summary.candidate_passes));
    md.push_str(&format!("- Both pass: **{}**\n", summary.both_pass));
    md.push_str(&format!(
        "- Mismatches: **{}**\n",
        reconciliation.mismatches.len()
    ));
    push_missing(&mut md, "cases", &reconciliation.missing);
    md.push('\n');

    push_warnings(&mut md, inputs, config);

    md.push_str("## Detailed Mismatches\n\n");
    if reconciliation.mismatches.is_empty() {
        md.push_str(&format!(
            "All test cases aligned between {} and {} for functionality.\n",
            r, c
        ));
    } else {
        let (r, c) = (escape_pipe(r), escape_pipe(c));
        md.push_str(&format!(
            "| Case | {r} Status | {c} Status | {r} Match | {c} Match | Notes |\n"
        ));
        md.push_str("|------|-------------|-------------|------------|------------|-------|\n");
        for mismatch in &reconciliation.mismatches {
            let (reference, candidate) = (&mismatch.reference, &mismatch.candidate);
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                escape_pipe(mismatch.name()),
                escape_pipe(&reference.status),
                escape_pipe(&candidate.status),
                reference.actual_match,
                candidate.actual_match,
                notes_cell(config, &reference.notes, &candidate.notes)
            ));
        }
    }
    md.push('\n');

    push_artifacts(
        &mut md,
        config,
        &config.artifacts.functional_reference,
        &config.artifacts.functional_candidate,
    );
    md
}

/// Renders the performance divergence document.
pub fn render_performance(
    reconciliation: &PerformanceReconciliation,
    inputs: &ReportInputs,
    config: &ReportConfig,
) -> String {
    let r = &config.reference_label;
    let c = &config.candidate_label;
    let summary = &reconciliation.summary;
    let mut md = String::new();

    push_header(&mut md, &config.performance_title(), &config.timestamp);

    md.push_str("## Summary\n");
    md.push_str(&format!("- Total scenarios: **{}**\n", summary.scenarios));
    md.push_str(&format!(
        "- {} avg throughput: **{:.2} MB/s**\n",
        r, summary.reference_avg_throughput
    ));
    md.push_str(&format!(
        "- {} avg throughput: **{:.2} MB/s**\n",
        c, summary.candidate_avg_throughput
    ));
    md.push_str(&format!(
        "- Avg throughput ratio ({}/{}): **{:.2}**\n",
        r, c, summary.avg_ratio
    ));
    md.push_str(&format!(
        "- {} faster on: **{}** scenarios\n",
        r, summary.reference_faster
    ));
    md.push_str(&format!(
        "- {} faster on: **{}** scenarios\n",
        c, summary.candidate_faster
    ));
    md.push_str(&format!(
        "- Mismatches: **{}**\n",
        reconciliation.mismatches.len()
    ));
    push_missing(&mut md, "scenarios", &reconciliation.missing);
    md.push('\n');

    push_warnings(&mut md, inputs, config);

    md.push_str("## Status Mismatches\n\n");
    if reconciliation.mismatches.is_empty() {
        md.push_str(&format!(
            "No status differences detected between {} and {}.\n",
            r, c
        ));
    } else {
        let (r, c) = (escape_pipe(r), escape_pipe(c));
        md.push_str(&format!("| Scenario | {r} Status | {c} Status | Notes |\n"));
        md.push_str("|----------|-------------|-------------|-------|\n");
        for row in &reconciliation.mismatches {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                escape_pipe(&row.name),
                escape_pipe(&row.status_reference),
                escape_pipe(&row.status_candidate),
                notes_cell(config, &row.notes_reference, &row.notes_candidate)
            ));
        }
    }
    md.push('\n');

    md.push_str("## Detailed Results\n\n");
    let (r, c) = (escape_pipe(r), escape_pipe(c));
    md.push_str(&format!(
        "| Scenario | Text Size | Iterations | {r} Avg ns | {c} Avg ns | {r} MB/s | {c} MB/s | Ratio ({r}/{c}) | Status ({r}/{c}) | Notes |\n"
    ));
    md.push_str(
        "|----------|-----------|------------|--------------|--------------|-----------|-----------|--------------|---------------|-------|\n",
    );
    for row in &reconciliation.rows {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {:.2} | {:.2} | {} | {}/{} | {} |\n",
            escape_pipe(&row.name),
            row.text_size,
            row.iterations,
            row.reference_avg_ns,
            row.candidate_avg_ns,
            row.reference_throughput,
            row.candidate_throughput,
            format_ratio(row.throughput_ratio),
            escape_pipe(&row.status_reference),
            escape_pipe(&row.status_candidate),
            notes_cell(config, &row.notes_reference, &row.notes_candidate)
        ));
    }
    md.push('\n');

    push_artifacts(
        &mut md,
        config,
        &config.artifacts.performance_reference,
        &config.artifacts.performance_candidate,
    );
    md
}

fn write_document(path: &Path, document: String) -> Result<()> {
    fs::write(path, document).map_err(|e| ReportError::io(path, e))?;
    debug!(path = %path.display(), "wrote report");
    Ok(())
}

/// Renders the functional document and writes it to `path`.
pub fn export_functional_markdown(
    reconciliation: &FunctionalReconciliation,
    inputs: &ReportInputs,
    config: &ReportConfig,
    path: &Path,
) -> Result<()> {
    write_document(path, render_functional(reconciliation, inputs, config))
}

/// Renders the performance document and writes it to `path`.
pub fn export_performance_markdown(
    reconciliation: &PerformanceReconciliation,
    inputs: &ReportInputs,
    config: &ReportConfig,
    path: &Path,
) -> Result<()> {
    write_document(path, render_performance(reconciliation, inputs, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_core::{reconcile_functional, reconcile_performance, FunctionalRecord, RecordTable};
    use tempfile::NamedTempFile;

    fn config() -> ReportConfig {
        ReportConfig::default()
            .with_labels("Odin", "Rust")
            .with_timestamp("2025-03-04 05:06:07")
    }

    fn record(name: &str, status: &str, actual_match: bool, notes: &str) -> FunctionalRecord {
        let mut record = FunctionalRecord::new(name, status);
        record.compile_ok = true;
        record.actual_match = actual_match;
        record.notes = notes.to_string();
        record
    }

    #[test]
    fn test_empty_notes_render_as_dash() {
        let config = config();
        assert_eq!(notes_cell(&config, "", "x|y"), "Odin: - / Rust: x\\|y");
    }

    #[test]
    fn test_labels_with_pipes_keep_table_columns() {
        let config = config().with_labels("A|B", "C");
        let reference: RecordTable<_> = vec![record("lit1", "PASS", true, "")].into_iter().collect();
        let candidate: RecordTable<_> = vec![record("lit1", "FAIL", false, "x")].into_iter().collect();
        let reconciliation = reconcile_functional(&reference, &candidate);

        let md = render_functional(&reconciliation, &ReportInputs::default(), &config);

        assert!(md.contains("| Case | A\\|B Status | C Status | A\\|B Match | C Match | Notes |\n"));
        assert!(md.contains("| lit1 | PASS | FAIL | true | false | A\\|B: - / C: x |\n"));
        let unescaped = |line: &str| line.replace("\\|", "").matches('|').count();
        for line in md.lines().filter(|line| line.starts_with('|')) {
            assert_eq!(unescaped(line), 7, "{}", line);
        }
    }

    #[test]
    fn test_functional_document_layout() {
        let reference: RecordTable<_> =
            vec![record("lit1", "PASS", true, ""), record("gone", "PASS", true, "")]
                .into_iter()
                .collect();
        let candidate: RecordTable<_> = vec![record("lit1", "FAIL", false, "no match")]
            .into_iter()
            .collect();
        let reconciliation = reconcile_functional(&reference, &candidate);

        let md = render_functional(&reconciliation, &ReportInputs::default(), &config());

        assert!(md.starts_with("# Odin vs Rust – Functionality Comparison\n\n"));
        assert!(md.contains("_Generated on 2025-03-04 05:06:07_"));
        assert!(md.contains("- Total cases: **2**\n"));
        assert!(md.contains("- Aligned cases: **1**\n"));
        assert!(md.contains("- Odin passes: **2**\n"));
        assert!(md.contains("- Rust passes: **0**\n"));
        assert!(md.contains("- Missing cases: **1** (`gone`)\n"));
        assert!(md.contains("| Case | Odin Status | Rust Status | Odin Match | Rust Match | Notes |"));
        assert!(md.contains("| lit1 | PASS | FAIL | true | false | Odin: - / Rust: no match |"));
        assert!(!md.contains("## Input Warnings"));
        assert!(md.ends_with(ARTIFACT_FOOTER));
    }

    #[test]
    fn test_functional_all_aligned() {
        let reconciliation = FunctionalReconciliation::default();
        let md = render_functional(&reconciliation, &ReportInputs::default(), &config());
        assert!(md.contains("All test cases aligned between Odin and Rust for functionality."));
        assert!(!md.contains("Missing cases"));
    }

    #[test]
    fn test_input_warnings_section() {
        let mut inputs = ReportInputs::default();
        inputs.candidate.coerced_booleans = 3;
        inputs.reference.duplicate_names = vec!["dup".to_string()];

        let md = render_functional(&FunctionalReconciliation::default(), &inputs, &config());
        assert!(md.contains("## Input Warnings"));
        assert!(md.contains("- Rust: **3** unrecognized boolean values"));
        assert!(md.contains("- Odin: **1** duplicate names overwritten by a later row (`dup`)"));
    }

    #[test]
    fn test_performance_no_differences() {
        let reconciliation = reconcile_performance(&RecordTable::new(), &RecordTable::new());
        let md = render_performance(&reconciliation, &ReportInputs::default(), &config());
        assert!(md.contains("- Total scenarios: **0**"));
        assert!(md.contains("- Odin avg throughput: **0.00 MB/s**"));
        assert!(md.contains("No status differences detected between Odin and Rust."));
        assert!(md.contains("| Scenario | Text Size | Iterations | Odin Avg ns | Rust Avg ns |"));
    }

    #[test]
    fn test_export_markdown() {
        let temp = NamedTempFile::new().unwrap();
        export_functional_markdown(
            &FunctionalReconciliation::default(),
            &ReportInputs::default(),
            &config(),
            temp.path(),
        )
        .unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("# Odin vs Rust"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("report.md");
        let err = export_performance_markdown(
            &PerformanceReconciliation::default(),
            &ReportInputs::default(),
            &config(),
            &path,
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
