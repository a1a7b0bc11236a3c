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

//! Console summary printed after the reports are written.

use crate::types::ReportConfig;
use colored::Colorize;
use parity_core::{FunctionalReconciliation, PerformanceReconciliation};
use std::path::Path;

/// Files involved in one comparison.
#[derive(Debug, Clone, Copy)]
pub struct ReportPaths<'a> {
    pub reference: &'a Path,
    pub candidate: &'a Path,
    pub report: &'a Path,
    pub json: Option<&'a Path>,
}

fn format_paths(out: &mut String, config: &ReportConfig, paths: &ReportPaths<'_>) {
    out.push_str(&format!(
        "- {} results: {}\n",
        config.reference_label,
        paths.reference.display()
    ));
    out.push_str(&format!(
        "- {} results: {}\n",
        config.candidate_label,
        paths.candidate.display()
    ));
    out.push_str(&format!("- Report: {}\n", paths.report.display()));
    if let Some(json) = paths.json {
        out.push_str(&format!("- JSON: {}\n", json.display()));
    }
}

fn format_names<'n>(
    out: &mut String,
    heading: &str,
    names: impl Iterator<Item = &'n str>,
) {
    let names: Vec<&str> = names.collect();
    if !names.is_empty() {
        out.push_str(&format!("{} {}\n", heading.yellow().bold(), names.join(", ")));
    }
}

/// Builds the functional summary text.
pub fn format_functional_summary(
    reconciliation: &FunctionalReconciliation,
    config: &ReportConfig,
    paths: &ReportPaths<'_>,
) -> String {
    let mut out = format!("{}\n", "Functionality comparison complete.".green().bold());
    format_paths(&mut out, config, paths);
    format_names(
        &mut out,
        "Functionality mismatches:",
        reconciliation.mismatches.iter().map(|m| m.name()),
    );
    format_names(
        &mut out,
        "Missing cases:",
        reconciliation.missing.iter().map(String::as_str),
    );
    out
}

/// Builds the performance summary text.
pub fn format_performance_summary(
    reconciliation: &PerformanceReconciliation,
    config: &ReportConfig,
    paths: &ReportPaths<'_>,
) -> String {
    let mut out = format!("{}\n", "Performance comparison complete.".green().bold());
    format_paths(&mut out, config, paths);
    format_names(
        &mut out,
        "Performance mismatches:",
        reconciliation.mismatches.iter().map(|row| row.name.as_str()),
    );
    format_names(
        &mut out,
        "Missing scenarios:",
        reconciliation.missing.iter().map(String::as_str),
    );
    out
}

/// Prints the functional summary to stdout.
pub fn print_functional_summary(
    reconciliation: &FunctionalReconciliation,
    config: &ReportConfig,
    paths: &ReportPaths<'_>,
) {
    print!("{}", format_functional_summary(reconciliation, config, paths));
}

/// Prints the performance summary to stdout.
pub fn print_performance_summary(
    reconciliation: &PerformanceReconciliation,
    config: &ReportConfig,
    paths: &ReportPaths<'_>,
) {
    print!("{}", format_performance_summary(reconciliation, config, paths));
}
