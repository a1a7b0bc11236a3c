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

//! Report configuration and side inputs.

use parity_core::{Keyed, RecordTable, TableDiagnostics};
use serde::Serialize;

/// Timestamp layout used in report headers.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in [`TIMESTAMP_FORMAT`].
pub fn local_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// File names listed under "Data Artifacts".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub functional_reference: String,
    pub functional_candidate: String,
    pub performance_reference: String,
    pub performance_candidate: String,
}

impl Default for ArtifactNames {
    fn default() -> Self {
        Self {
            functional_reference: "functional_reference.tsv".to_string(),
            functional_candidate: "functional_candidate.tsv".to_string(),
            performance_reference: "performance_reference.tsv".to_string(),
            performance_candidate: "performance_candidate.tsv".to_string(),
        }
    }
}

/// Labels, titles and timestamp shared by every rendered document.
///
/// Titles default to `"<reference> vs <candidate> – <kind> Comparison"` and
/// follow label changes unless set explicitly.
///
/// # Examples
///
/// ```
/// use parity_report::ReportConfig;
///
/// let config = ReportConfig::default()
///     .with_labels("Odin RE2", "Rust regex")
///     .with_timestamp("2025-01-01 00:00:00");
///
/// assert_eq!(
///     config.functional_title(),
///     "Odin RE2 vs Rust regex – Functionality Comparison"
/// );
/// assert_eq!(config.timestamp, "2025-01-01 00:00:00");
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Display name of the reference source (default: `Reference`).
    pub reference_label: String,
    /// Display name of the candidate source (default: `Candidate`).
    pub candidate_label: String,
    /// Explicit functional document title.
    pub functional_title: Option<String>,
    /// Explicit performance document title.
    pub performance_title: Option<String>,
    /// Generation time shown under the title (default: local now).
    pub timestamp: String,
    pub artifacts: ArtifactNames,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reference_label: "Reference".to_string(),
            candidate_label: "Candidate".to_string(),
            functional_title: None,
            performance_title: None,
            timestamp: local_timestamp(),
            artifacts: ArtifactNames::default(),
        }
    }
}

impl ReportConfig {
    pub fn with_labels(mut self, reference: impl Into<String>, candidate: impl Into<String>) -> Self {
        self.reference_label = reference.into();
        self.candidate_label = candidate.into();
        self
    }

    pub fn with_functional_title(mut self, title: impl Into<String>) -> Self {
        self.functional_title = Some(title.into());
        self
    }

    pub fn with_performance_title(mut self, title: impl Into<String>) -> Self {
        self.performance_title = Some(title.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_artifacts(mut self, artifacts: ArtifactNames) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn functional_title(&self) -> String {
        self.functional_title
            .clone()
            .unwrap_or_else(|| self.default_title("Functionality"))
    }

    pub fn performance_title(&self) -> String {
        self.performance_title
            .clone()
            .unwrap_or_else(|| self.default_title("Performance"))
    }

    fn default_title(&self, kind: &str) -> String {
        format!(
            "{} vs {} – {} Comparison",
            self.reference_label, self.candidate_label, kind
        )
    }
}

/// Load diagnostics of both sources, shown as input warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportInputs {
    pub reference: TableDiagnostics,
    pub candidate: TableDiagnostics,
}

impl ReportInputs {
    /// Captures the diagnostics of two loaded tables.
    pub fn from_tables<R: Keyed>(reference: &RecordTable<R>, candidate: &RecordTable<R>) -> Self {
        Self {
            reference: reference.diagnostics().clone(),
            candidate: candidate.diagnostics().clone(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.reference.has_warnings() || self.candidate.has_warnings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_and_titles() {
        let config = ReportConfig::default();
        assert_eq!(config.reference_label, "Reference");
        assert_eq!(config.candidate_label, "Candidate");
        assert_eq!(
            config.performance_title(),
            "Reference vs Candidate – Performance Comparison"
        );
    }

    #[test]
    fn test_explicit_title_survives_label_change() {
        let config = ReportConfig::default()
            .with_functional_title("Nightly parity")
            .with_labels("A", "B");
        assert_eq!(config.functional_title(), "Nightly parity");
        assert_eq!(config.performance_title(), "A vs B – Performance Comparison");
    }

    #[test]
    fn test_timestamp_layout() {
        let ts = local_timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_inputs_warnings() {
        let mut inputs = ReportInputs::default();
        assert!(!inputs.has_warnings());
        inputs.candidate.coerced_booleans = 1;
        assert!(inputs.has_warnings());
    }
}
