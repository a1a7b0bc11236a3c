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

//! Reconciliation engine for reference/candidate regex benchmark results.
//!
//! Two independently produced result sets, one from a reference regex engine
//! and one from a candidate implementing the same behavior, are aligned by
//! case or scenario name and compared.
//!
//! ## Pipeline
//!
//! - [`RecordTable`]: name-keyed records from one source (filled by the loader)
//! - [`reconcile_functional`]: compile/match/verification agreement per case
//! - [`reconcile_performance`]: side-by-side latency and throughput per scenario
//! - [`PerformanceSummary`]: averages and ratio buckets for the report
//!
//! ## Example
//!
//! ```
//! use parity_core::{reconcile_functional, FunctionalRecord, RecordTable};
//!
//! let reference: RecordTable<_> = vec![FunctionalRecord::new("lit1", "PASS")]
//!     .into_iter()
//!     .collect();
//! let candidate: RecordTable<_> = vec![FunctionalRecord::new("lit1", "FAIL")]
//!     .into_iter()
//!     .collect();
//!
//! let result = reconcile_functional(&reference, &candidate);
//! assert_eq!(result.mismatches.len(), 1);
//! assert!(result.missing.is_empty());
//! ```
//!
//! Every function here is pure: nothing is retained between calls.

pub mod functional;
pub mod performance;
pub mod record;
pub mod stats;
pub mod table;

pub use functional::{
    reconcile_functional, records_align, FunctionalMismatch, FunctionalReconciliation,
    FunctionalSummary,
};
pub use performance::{
    reconcile_performance, throughput_ratio, PerfComparisonRow, PerformanceReconciliation,
};
pub use record::{FunctionalRecord, Keyed, PerformanceRecord, PASS_STATUS};
pub use stats::{format_ratio, positive_average, PerformanceSummary};
pub use table::{align, Aligned, RecordTable, TableDiagnostics};
