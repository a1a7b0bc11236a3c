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

//! Structured error types for the `parity` binary.

use parity_report::ReportError;
use parity_tsv::TsvError;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a comparison run.
///
/// Divergence between sources is never an error. Only unreadable inputs,
/// schema violations and failed writes end up here.
///
/// # Examples
///
/// ```
/// use parity_cli::error::CliError;
///
/// let err = CliError::invalid_input("Results directory 'out' does not exist");
/// assert_eq!(err.to_string(), "Invalid input: Results directory 'out' does not exist");
/// ```
#[derive(Debug, Error)]
pub enum CliError {
    /// A result table could not be loaded.
    #[error("Failed to load '{path}': {source}")]
    Load {
        /// Table that failed.
        path: PathBuf,
        #[source]
        source: TsvError,
    },

    /// A report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Arguments that cannot be acted on.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn load(path: impl Into<PathBuf>, source: TsvError) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
