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

//! Comparative statistics over reconciled performance rows.

use crate::performance::PerfComparisonRow;
use serde::{Serialize, Serializer};

/// Mean over the strictly positive entries only.
///
/// Zero, negative and NaN entries are left out rather than averaged in, so a
/// failed or unmeasured scenario does not drag the mean toward zero. Returns
/// `0.0` when no entry qualifies.
pub fn positive_average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|v| *v > 0.0)
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Renders a throughput ratio for a report cell.
///
/// NaN renders as `n/a`, infinity as `inf`, anything else with two decimals.
pub fn format_ratio(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Serializes finite ratios as numbers and the rest as their report text.
pub fn serialize_ratio<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&format_ratio(*value))
    }
}

/// Summary block of the performance report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceSummary {
    /// Scenarios present in both sources.
    pub scenarios: usize,
    pub reference_avg_throughput: f64,
    pub candidate_avg_throughput: f64,
    /// Average over finite, strictly positive ratios.
    pub avg_ratio: f64,
    /// Scenarios with ratio > 1, infinity included.
    pub reference_faster: usize,
    /// Scenarios with 0 < ratio < 1.
    pub candidate_faster: usize,
    pub mismatches: usize,
    pub missing: usize,
}

impl PerformanceSummary {
    /// Computes the summary for a set of comparison rows.
    pub fn from_rows(rows: &[PerfComparisonRow], mismatches: usize, missing: usize) -> Self {
        let ratios = || rows.iter().map(|row| row.throughput_ratio);

        Self {
            scenarios: rows.len(),
            reference_avg_throughput: positive_average(rows.iter().map(|r| r.reference_throughput)),
            candidate_avg_throughput: positive_average(rows.iter().map(|r| r.candidate_throughput)),
            avg_ratio: positive_average(ratios().filter(|r| r.is_finite())),
            reference_faster: ratios().filter(|r| *r > 1.0).count(),
            candidate_faster: ratios().filter(|r| *r > 0.0 && *r < 1.0).count(),
            mismatches,
            missing,
        }
    }
}
