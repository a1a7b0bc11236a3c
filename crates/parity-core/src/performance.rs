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

//! Performance reconciliation.
//!
//! Builds one [`PerfComparisonRow`] per scenario present in both sources.
//! Status and match disagreements are flagged; throughput differences are
//! reported numerically and never flagged.

use crate::record::PerformanceRecord;
use crate::stats::{serialize_ratio, PerformanceSummary};
use crate::table::{align, Aligned, RecordTable};
use serde::Serialize;
use tracing::debug;

/// Side-by-side view of one scenario measured by both sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfComparisonRow {
    pub name: String,
    /// Larger of the two reported text sizes.
    pub text_size: u64,
    /// Larger of the two reported iteration counts.
    pub iterations: u64,
    pub reference_avg_ns: u64,
    pub candidate_avg_ns: u64,
    pub reference_throughput: f64,
    pub candidate_throughput: f64,
    /// Reference throughput over candidate throughput. See [`throughput_ratio`].
    #[serde(serialize_with = "serialize_ratio")]
    pub throughput_ratio: f64,
    pub status_reference: String,
    pub status_candidate: String,
    pub matched_reference: bool,
    pub matched_candidate: bool,
    pub notes_reference: String,
    pub notes_candidate: String,
}

impl PerfComparisonRow {
    /// Builds the row for two records of the same scenario.
    pub fn new(reference: &PerformanceRecord, candidate: &PerformanceRecord) -> Self {
        Self {
            name: reference.name.clone(),
            text_size: reference.text_size.max(candidate.text_size),
            iterations: reference.iterations.max(candidate.iterations),
            reference_avg_ns: reference.match_avg_ns,
            candidate_avg_ns: candidate.match_avg_ns,
            reference_throughput: reference.throughput_mb_s,
            candidate_throughput: candidate.throughput_mb_s,
            throughput_ratio: throughput_ratio(reference.throughput_mb_s, candidate.throughput_mb_s),
            status_reference: reference.status.clone(),
            status_candidate: candidate.status.clone(),
            matched_reference: reference.matched,
            matched_candidate: candidate.matched,
            notes_reference: reference.notes.clone(),
            notes_candidate: candidate.notes.clone(),
        }
    }

    /// Returns whether status or match outcome differs between sources.
    pub fn is_mismatch(&self) -> bool {
        self.status_reference != self.status_candidate
            || self.matched_reference != self.matched_candidate
    }
}

/// Ratio of reference to candidate throughput.
///
/// * candidate > 0: `reference / candidate`
/// * candidate not > 0, reference > 0: `+inf`
/// * otherwise: `0`
pub fn throughput_ratio(reference: f64, candidate: f64) -> f64 {
    if candidate > 0.0 {
        reference / candidate
    } else if reference > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Result of [`reconcile_performance`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PerformanceReconciliation {
    /// One row per common scenario, ordered by name.
    pub rows: Vec<PerfComparisonRow>,
    /// Rows whose status or match outcome differs.
    pub mismatches: Vec<PerfComparisonRow>,
    /// Names present in exactly one source, ordered.
    pub missing: Vec<String>,
    pub summary: PerformanceSummary,
}

/// Reconciles performance results from both sources.
pub fn reconcile_performance(
    reference: &RecordTable<PerformanceRecord>,
    candidate: &RecordTable<PerformanceRecord>,
) -> PerformanceReconciliation {
    let mut rows = Vec::new();
    let mut mismatches = Vec::new();
    let mut missing = Vec::new();

    for entry in align(reference, candidate) {
        match entry {
            Aligned::Both(r, c) => {
                let row = PerfComparisonRow::new(r, c);
                if row.is_mismatch() {
                    mismatches.push(row.clone());
                }
                rows.push(row);
            }
            Aligned::ReferenceOnly(name) | Aligned::CandidateOnly(name) => {
                missing.push(name.to_string());
            }
        }
    }

    let summary = PerformanceSummary::from_rows(&rows, mismatches.len(), missing.len());

    debug!(
        scenarios = rows.len(),
        mismatches = mismatches.len(),
        missing = missing.len(),
        "performance reconciliation complete"
    );

    PerformanceReconciliation {
        rows,
        mismatches,
        missing,
        summary,
    }
}
