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

//! Command implementations.

mod all;
mod functional;
mod performance;

pub use all::{
    all, FUNCTIONAL_CANDIDATE_FILE, FUNCTIONAL_REFERENCE_FILE, FUNCTIONAL_REPORT_FILE,
    PERFORMANCE_CANDIDATE_FILE, PERFORMANCE_REFERENCE_FILE, PERFORMANCE_REPORT_FILE,
};
pub use functional::functional;
pub use performance::performance;

use crate::error::CliError;
use parity_core::RecordTable;
use parity_report::ReportConfig;
use parity_tsv::{FromTsvConfig, TsvSchema};
use std::path::Path;
use tracing::info;

/// Settings shared by every comparison in one run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub load: FromTsvConfig,
    pub report: ReportConfig,
}

/// Loads one table, attaching the path to any failure.
fn load<S: TsvSchema>(path: &Path, config: &FromTsvConfig) -> Result<RecordTable<S>, CliError> {
    let table = parity_tsv::load_table(path, config).map_err(|e| CliError::load(path, e))?;
    info!(
        path = %path.display(),
        records = table.len(),
        "loaded {} table",
        S::TABLE
    );
    Ok(table)
}

/// File name shown under "Data Artifacts", falling back to the full path.
fn artifact_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
