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

//! JSON export of reconciled state.

use crate::error::{ReportError, Result};
use crate::types::{ReportConfig, ReportInputs};
use parity_core::{FunctionalReconciliation, PerformanceReconciliation};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reconciled state plus the labels and diagnostics it was rendered with.
///
/// Ratios that are not finite serialize as `"inf"` or `"n/a"`.
#[derive(Debug, Serialize)]
pub struct ReconciliationExport<'a, T: Serialize> {
    /// `functional` or `performance`.
    pub kind: &'static str,
    pub generated: &'a str,
    pub reference_label: &'a str,
    pub candidate_label: &'a str,
    pub inputs: &'a ReportInputs,
    pub reconciliation: &'a T,
}

impl<'a> ReconciliationExport<'a, FunctionalReconciliation> {
    pub fn functional(
        reconciliation: &'a FunctionalReconciliation,
        inputs: &'a ReportInputs,
        config: &'a ReportConfig,
    ) -> Self {
        Self::new("functional", reconciliation, inputs, config)
    }
}

impl<'a> ReconciliationExport<'a, PerformanceReconciliation> {
    pub fn performance(
        reconciliation: &'a PerformanceReconciliation,
        inputs: &'a ReportInputs,
        config: &'a ReportConfig,
    ) -> Self {
        Self::new("performance", reconciliation, inputs, config)
    }
}

impl<'a, T: Serialize> ReconciliationExport<'a, T> {
    fn new(
        kind: &'static str,
        reconciliation: &'a T,
        inputs: &'a ReportInputs,
        config: &'a ReportConfig,
    ) -> Self {
        Self {
            kind,
            generated: &config.timestamp,
            reference_label: &config.reference_label,
            candidate_label: &config.candidate_label,
            inputs,
            reconciliation,
        }
    }

    /// Pretty-printed JSON text.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes an export as pretty-printed JSON.
pub fn export_json<T: Serialize>(export: &ReconciliationExport<'_, T>, path: &Path) -> Result<()> {
    let json = export.to_json_string()?;
    fs::write(path, json).map_err(|e| ReportError::io(path, e))?;
    Ok(())
}
