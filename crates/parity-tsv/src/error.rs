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

//! Error types for loading and writing result tables.

use std::path::PathBuf;
use thiserror::Error;

/// Schema and I/O failures while reading or writing a result table.
///
/// Every variant is fatal for the table being loaded. Tolerated absences
/// (empty boolean or throughput cells, missing notes) never produce an error.
#[derive(Debug, Error)]
pub enum TsvError {
    /// A column the schema cannot do without is absent from the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use parity_tsv::TsvError;
    ///
    /// let err = TsvError::MissingColumn {
    ///     table: "functional",
    ///     column: "compile_ns".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Missing required column 'compile_ns' in functional table"
    /// );
    /// ```
    #[error("Missing required column '{column}' in {table} table")]
    MissingColumn {
        /// Table kind (`functional` or `performance`).
        table: &'static str,
        /// Column name.
        column: String,
    },

    /// A required cell is empty or beyond the end of a short row.
    #[error("Row {row}: missing value for required field '{field}'")]
    MissingField {
        /// Data row number (1-based, header excluded).
        row: usize,
        /// Field name.
        field: String,
    },

    /// An integer field holds something other than a non-negative integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use parity_tsv::TsvError;
    ///
    /// let err = TsvError::InvalidInteger {
    ///     row: 3,
    ///     field: "match_ns".to_string(),
    ///     value: "fast".to_string(),
    /// };
    /// assert!(err.to_string().contains("Row 3"));
    /// assert!(err.to_string().contains("match_ns"));
    /// ```
    #[error("Row {row}: field '{field}' expects a non-negative integer, got '{value}'")]
    InvalidInteger {
        row: usize,
        field: String,
        value: String,
    },

    /// A decimal field holds something that is not a number.
    #[error("Row {row}: field '{field}' expects a decimal number, got '{value}'")]
    InvalidFloat {
        row: usize,
        field: String,
        value: String,
    },

    /// A name repeated within one table while duplicates are rejected.
    #[error("Row {row}: duplicate name '{name}'")]
    DuplicateName { row: usize, name: String },

    /// Table exceeds the configured row limit.
    #[error("Row limit exceeded: table has more than {limit} rows")]
    RowLimit { limit: usize },

    /// Malformed record (for example invalid UTF-8 or an unterminated quote).
    #[error("TSV parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// File could not be opened or written.
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// Error from the underlying CSV library outside of a data row.
    #[error("TSV library error: {0}")]
    Csv(#[from] csv::Error),
}

impl TsvError {
    /// Creates an I/O error with file path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Data row the error points at, when there is one.
    pub fn row(&self) -> Option<usize> {
        match self {
            TsvError::MissingField { row, .. }
            | TsvError::InvalidInteger { row, .. }
            | TsvError::InvalidFloat { row, .. }
            | TsvError::DuplicateName { row, .. }
            | TsvError::Parse { row, .. } => Some(*row),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TsvError>;
