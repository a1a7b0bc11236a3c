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

//! Functional reconciliation.
//!
//! Aligns functional records from the reference and candidate sources by
//! name and classifies every aligned pair as agreeing or mismatched.

use crate::record::FunctionalRecord;
use crate::table::{align, Aligned, RecordTable};
use serde::Serialize;
use tracing::debug;

/// An aligned pair whose outcomes disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionalMismatch {
    pub reference: FunctionalRecord,
    pub candidate: FunctionalRecord,
}

impl FunctionalMismatch {
    /// Case name shared by both records.
    pub fn name(&self) -> &str {
        &self.reference.name
    }
}

/// Aggregate counts for the functional summary block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionalSummary {
    /// Size of the union of names across both sources.
    pub total_cases: usize,
    /// Names present in both sources.
    pub aligned_cases: usize,
    /// Reference records with status `PASS`.
    pub reference_passes: usize,
    /// Candidate records with status `PASS`.
    pub candidate_passes: usize,
    /// Aligned names where both records pass.
    pub both_pass: usize,
}

/// Result of [`reconcile_functional`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct FunctionalReconciliation {
    /// Disagreeing pairs, ordered by name.
    pub mismatches: Vec<FunctionalMismatch>,
    /// Names present in exactly one source, ordered.
    pub missing: Vec<String>,
    pub summary: FunctionalSummary,
}

impl FunctionalReconciliation {
    /// Returns whether every aligned pair agrees and no name is missing.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.missing.is_empty()
    }
}

/// Returns whether two records of the same case describe the same outcome.
///
/// `match_verified` is only compared when both sources requested full-span
/// verification. Asymmetric opt-in is not a disagreement.
pub fn records_align(reference: &FunctionalRecord, candidate: &FunctionalRecord) -> bool {
    if reference.status != candidate.status {
        return false;
    }
    if reference.compile_ok != candidate.compile_ok {
        return false;
    }
    if reference.actual_match != candidate.actual_match {
        return false;
    }
    if reference.verify_full_match
        && candidate.verify_full_match
        && reference.match_verified != candidate.match_verified
    {
        return false;
    }
    true
}

/// Reconciles functional results from both sources.
///
/// Iterates the union of names in lexicographic order so repeated runs over
/// the same inputs produce identical output.
pub fn reconcile_functional(
    reference: &RecordTable<FunctionalRecord>,
    candidate: &RecordTable<FunctionalRecord>,
) -> FunctionalReconciliation {
    let mut result = FunctionalReconciliation::default();

    for entry in align(reference, candidate) {
        result.summary.total_cases += 1;
        match entry {
            Aligned::Both(r, c) => {
                result.summary.aligned_cases += 1;
                if r.is_pass() && c.is_pass() {
                    result.summary.both_pass += 1;
                }
                if !records_align(r, c) {
                    result.mismatches.push(FunctionalMismatch {
                        reference: r.clone(),
                        candidate: c.clone(),
                    });
                }
            }
            Aligned::ReferenceOnly(name) | Aligned::CandidateOnly(name) => {
                result.missing.push(name.to_string());
            }
        }
    }

    result.summary.reference_passes = reference.records().filter(|r| r.is_pass()).count();
    result.summary.candidate_passes = candidate.records().filter(|r| r.is_pass()).count();

    debug!(
        total = result.summary.total_cases,
        mismatches = result.mismatches.len(),
        missing = result.missing.len(),
        "functional reconciliation complete"
    );

    result
}
