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

//! Divergence reports for reconciled benchmark results.
//!
//! - [`markdown`]: human-readable functional and performance documents
//! - [`json`]: machine-readable export of the same state
//! - [`console`]: short stdout summary with report locations
//!
//! Rendering is pure and returns a `String`; only the `export_*` functions
//! touch the filesystem.
//!
//! # Examples
//!
//! ```
//! use parity_core::{reconcile_functional, FunctionalRecord, RecordTable};
//! use parity_report::{render_functional, ReportConfig, ReportInputs};
//!
//! let reference: RecordTable<_> = vec![FunctionalRecord::new("lit1", "PASS")].into_iter().collect();
//! let candidate: RecordTable<_> = vec![FunctionalRecord::new("lit1", "FAIL")].into_iter().collect();
//! let reconciliation = reconcile_functional(&reference, &candidate);
//!
//! let config = ReportConfig::default().with_timestamp("2025-01-01 00:00:00");
//! let md = render_functional(&reconciliation, &ReportInputs::from_tables(&reference, &candidate), &config);
//!
//! assert!(md.contains("- Mismatches: **1**"));
//! assert!(md.contains("| lit1 | PASS | FAIL |"));
//! ```

pub mod console;
mod error;
pub mod json;
pub mod markdown;
mod types;

pub use console::{
    format_functional_summary, format_performance_summary, print_functional_summary,
    print_performance_summary, ReportPaths,
};
pub use error::{ReportError, Result};
pub use json::{export_json, ReconciliationExport};
pub use markdown::{
    escape_pipe, export_functional_markdown, export_performance_markdown, render_functional,
    render_performance,
};
pub use types::{local_timestamp, ArtifactNames, ReportConfig, ReportInputs, TIMESTAMP_FORMAT};
