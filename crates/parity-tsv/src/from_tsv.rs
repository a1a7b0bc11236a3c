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

//! Load tab-delimited result tables into typed record tables.
//!
//! Parsing is lenient where the upstream writers disagree and strict where the
//! comparison depends on the value:
//!
//! | Cell                         | Absent or empty   | Unparseable     |
//! |------------------------------|-------------------|-----------------|
//! | boolean                      | `false`           | `false` (counted) |
//! | `*_ns`, `text_size`, `iterations` | error        | error           |
//! | `throughput_mb_s`            | `0.0`             | error           |
//! | `notes`, `pattern`           | empty string      | n/a             |

use crate::error::{Result, TsvError};
use parity_core::{FunctionalRecord, Keyed, PerformanceRecord, RecordTable};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Default maximum number of data rows per table.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Environment variable overriding [`DEFAULT_MAX_ROWS`].
pub const MAX_ROWS_ENV: &str = "PARITY_MAX_ROWS";

/// Tokens that parse as `true`, compared case-insensitively.
pub const TRUE_TOKENS: &[&str] = &["true", "1", "yes"];

/// Tokens that parse as `false` without being counted as a coercion.
const FALSE_TOKENS: &[&str] = &["false", "0", "no"];

/// What to do when a name appears twice in one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the later row and record the name in the table diagnostics.
    #[default]
    LastWriteWins,
    /// Fail the load with [`TsvError::DuplicateName`].
    Reject,
}

/// Configuration for table loading.
///
/// # Examples
///
/// ```
/// use parity_tsv::{DuplicatePolicy, FromTsvConfig};
///
/// let config = FromTsvConfig::default();
/// assert_eq!(config.delimiter, b'\t');
/// assert_eq!(config.duplicates, DuplicatePolicy::LastWriteWins);
///
/// let strict = FromTsvConfig::default().with_duplicates(DuplicatePolicy::Reject);
/// assert_eq!(strict.duplicates, DuplicatePolicy::Reject);
/// ```
#[derive(Debug, Clone)]
pub struct FromTsvConfig {
    /// Field delimiter (default: tab).
    pub delimiter: u8,
    /// Maximum number of data rows (default: 1,000,000).
    pub max_rows: usize,
    /// Duplicate name handling (default: last write wins).
    pub duplicates: DuplicatePolicy,
}

impl Default for FromTsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            max_rows: DEFAULT_MAX_ROWS,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl FromTsvConfig {
    /// Default configuration with `PARITY_MAX_ROWS` applied when it is set to
    /// a valid number.
    pub fn from_env() -> Self {
        let max_rows = std::env::var(MAX_ROWS_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_ROWS);
        Self::default().with_max_rows(max_rows)
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

/// Parses a boolean cell.
///
/// `true`, `1` and `yes` in any case are true. Every other token, the empty
/// string included, is false. This never fails.
///
/// ```
/// use parity_tsv::parse_bool;
///
/// assert!(parse_bool("YES"));
/// assert!(parse_bool("1"));
/// assert!(!parse_bool("y"));
/// assert!(!parse_bool(""));
/// ```
pub fn parse_bool(token: &str) -> bool {
    TRUE_TOKENS.iter().any(|t| token.eq_ignore_ascii_case(t))
}

fn is_recognized_bool(token: &str) -> bool {
    token.is_empty()
        || TRUE_TOKENS
            .iter()
            .chain(FALSE_TOKENS)
            .any(|t| token.eq_ignore_ascii_case(t))
}

/// A record kind with a fixed tab-delimited schema.
pub trait TsvSchema: Keyed + Sized {
    /// Table kind used in error messages.
    const TABLE: &'static str;
    /// Canonical column order, as written by [`crate::to_tsv`].
    const COLUMNS: &'static [&'static str];
    /// Columns the header must contain.
    const REQUIRED: &'static [&'static str];

    /// Builds a record from one data row.
    fn from_row(row: &mut Row<'_>) -> Result<Self>;

    /// Cells in [`Self::COLUMNS`] order.
    fn to_row(&self) -> Vec<String>;
}

/// Column name to position lookup built from the header.
#[derive(Debug)]
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        for (position, name) in headers.iter().enumerate() {
            // First occurrence wins when a header repeats a column.
            index.entry(name.trim().to_string()).or_insert(position);
        }
        Self { index }
    }

    fn require(&self, table: &'static str, required: &[&str]) -> Result<()> {
        match required.iter().find(|c| !self.index.contains_key(**c)) {
            Some(column) => Err(TsvError::MissingColumn {
                table,
                column: column.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Typed access to the cells of one data row.
pub struct Row<'a> {
    record: &'a csv::StringRecord,
    columns: &'a Columns,
    number: usize,
    coerced: usize,
}

impl<'a> Row<'a> {
    fn new(record: &'a csv::StringRecord, columns: &'a Columns, number: usize) -> Self {
        Self {
            record,
            columns,
            number,
            coerced: 0,
        }
    }

    /// Data row number (1-based).
    pub fn number(&self) -> usize {
        self.number
    }

    /// Raw cell, `None` when the column or the cell is absent.
    pub fn cell(&self, field: &str) -> Option<&'a str> {
        self.columns
            .index
            .get(field)
            .and_then(|&position| self.record.get(position))
    }

    /// Text cell, empty when absent.
    pub fn text(&self, field: &str) -> String {
        self.cell(field).unwrap_or_default().to_string()
    }

    /// Text cell that must be present and non-empty.
    pub fn required_text(&self, field: &str) -> Result<String> {
        match self.cell(field) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(self.missing(field)),
        }
    }

    /// Boolean cell. Unrecognized non-empty tokens resolve to false and are
    /// counted. The cell is not trimmed, so `" true"` is unrecognized.
    pub fn boolean(&mut self, field: &str) -> bool {
        let token = self.cell(field).unwrap_or_default();
        if !is_recognized_bool(token) {
            self.coerced += 1;
            warn!(
                row = self.number,
                field, token, "unrecognized boolean token treated as false"
            );
        }
        parse_bool(token)
    }

    /// Non-negative integer cell. Absent, empty or non-numeric is an error.
    pub fn integer(&self, field: &str) -> Result<u64> {
        let value = match self.cell(field).map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(self.missing(field)),
        };
        value.parse::<u64>().map_err(|_| TsvError::InvalidInteger {
            row: self.number,
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    /// Decimal cell where absent or empty means zero.
    pub fn decimal_or_zero(&self, field: &str) -> Result<f64> {
        let value = self.cell(field).map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Ok(0.0);
        }
        value.parse::<f64>().map_err(|_| TsvError::InvalidFloat {
            row: self.number,
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    fn missing(&self, field: &str) -> TsvError {
        TsvError::MissingField {
            row: self.number,
            field: field.to_string(),
        }
    }
}

impl TsvSchema for FunctionalRecord {
    const TABLE: &'static str = "functional";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "should_compile",
        "compile_ok",
        "should_match",
        "actual_match",
        "verify_full_match",
        "match_verified",
        "compile_ns",
        "match_ns",
        "status",
        "notes",
    ];
    const REQUIRED: &'static [&'static str] = &["name", "compile_ns", "match_ns", "status"];

    fn from_row(row: &mut Row<'_>) -> Result<Self> {
        Ok(Self {
            name: row.required_text("name")?,
            should_compile: row.boolean("should_compile"),
            compile_ok: row.boolean("compile_ok"),
            should_match: row.boolean("should_match"),
            actual_match: row.boolean("actual_match"),
            verify_full_match: row.boolean("verify_full_match"),
            match_verified: row.boolean("match_verified"),
            compile_ns: row.integer("compile_ns")?,
            match_ns: row.integer("match_ns")?,
            status: row.text("status"),
            notes: row.text("notes"),
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.should_compile.to_string(),
            self.compile_ok.to_string(),
            self.should_match.to_string(),
            self.actual_match.to_string(),
            self.verify_full_match.to_string(),
            self.match_verified.to_string(),
            self.compile_ns.to_string(),
            self.match_ns.to_string(),
            self.status.clone(),
            self.notes.clone(),
        ]
    }
}

impl TsvSchema for PerformanceRecord {
    const TABLE: &'static str = "performance";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "pattern",
        "text_size",
        "iterations",
        "compile_ns",
        "match_total_ns",
        "match_avg_ns",
        "throughput_mb_s",
        "matched",
        "status",
        "notes",
    ];
    const REQUIRED: &'static [&'static str] = &[
        "name",
        "text_size",
        "iterations",
        "compile_ns",
        "match_total_ns",
        "match_avg_ns",
        "status",
    ];

    fn from_row(row: &mut Row<'_>) -> Result<Self> {
        Ok(Self {
            name: row.required_text("name")?,
            pattern: row.text("pattern"),
            text_size: row.integer("text_size")?,
            iterations: row.integer("iterations")?,
            compile_ns: row.integer("compile_ns")?,
            match_total_ns: row.integer("match_total_ns")?,
            match_avg_ns: row.integer("match_avg_ns")?,
            throughput_mb_s: row.decimal_or_zero("throughput_mb_s")?,
            matched: row.boolean("matched"),
            status: row.text("status"),
            notes: row.text("notes"),
        })
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.pattern.clone(),
            self.text_size.to_string(),
            self.iterations.to_string(),
            self.compile_ns.to_string(),
            self.match_total_ns.to_string(),
            self.match_avg_ns.to_string(),
            self.throughput_mb_s.to_string(),
            self.matched.to_string(),
            self.status.clone(),
            self.notes.clone(),
        ]
    }
}

/// Loads a table of any schema from a reader.
pub fn table_from_reader<S: TsvSchema, R: Read>(
    reader: R,
    config: &FromTsvConfig,
) -> Result<RecordTable<S>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(csv_reader.headers()?);
    columns.require(S::TABLE, S::REQUIRED)?;

    let mut table = RecordTable::new();
    let mut rows_read = 0;
    let mut coerced = 0;

    for (index, result) in csv_reader.records().enumerate() {
        let number = index + 1;
        let record = result.map_err(|e| TsvError::Parse {
            row: number,
            message: e.to_string(),
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if rows_read >= config.max_rows {
            return Err(TsvError::RowLimit {
                limit: config.max_rows,
            });
        }

        let mut row = Row::new(&record, &columns, number);
        let parsed = S::from_row(&mut row)?;
        coerced += row.coerced;
        rows_read += 1;

        if config.duplicates == DuplicatePolicy::Reject && table.contains(parsed.name()) {
            return Err(TsvError::DuplicateName {
                row: number,
                name: parsed.name().to_string(),
            });
        }
        if let Some(previous) = table.insert(parsed) {
            warn!(
                table = S::TABLE,
                row = number,
                name = previous.name(),
                "duplicate name overwrites earlier row"
            );
        }
    }

    let diagnostics = table.diagnostics_mut();
    diagnostics.rows_read = rows_read;
    diagnostics.coerced_booleans = coerced;

    debug!(
        table = S::TABLE,
        rows = rows_read,
        records = table.len(),
        coerced,
        "loaded result table"
    );

    Ok(table)
}

/// Loads a table of any schema from a file.
pub fn load_table<S: TsvSchema>(
    path: impl AsRef<Path>,
    config: &FromTsvConfig,
) -> Result<RecordTable<S>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TsvError::io(path, e))?;
    debug!(path = %path.display(), table = S::TABLE, "reading result table");
    table_from_reader(file, config)
}

/// Loads a functional results file.
pub fn load_functional(
    path: impl AsRef<Path>,
    config: &FromTsvConfig,
) -> Result<RecordTable<FunctionalRecord>> {
    load_table(path, config)
}

/// Loads a performance results file.
pub fn load_performance(
    path: impl AsRef<Path>,
    config: &FromTsvConfig,
) -> Result<RecordTable<PerformanceRecord>> {
    load_table(path, config)
}

/// Loads functional results from a reader.
pub fn functional_from_reader<R: Read>(
    reader: R,
    config: &FromTsvConfig,
) -> Result<RecordTable<FunctionalRecord>> {
    table_from_reader(reader, config)
}

/// Loads performance results from a reader.
pub fn performance_from_reader<R: Read>(
    reader: R,
    config: &FromTsvConfig,
) -> Result<RecordTable<PerformanceRecord>> {
    table_from_reader(reader, config)
}

/// Loads functional results from TSV text with the default configuration.
pub fn functional_from_str(tsv: &str) -> Result<RecordTable<FunctionalRecord>> {
    functional_from_reader(tsv.as_bytes(), &FromTsvConfig::default())
}

/// Loads performance results from TSV text with the default configuration.
pub fn performance_from_str(tsv: &str) -> Result<RecordTable<PerformanceRecord>> {
    performance_from_reader(tsv.as_bytes(), &FromTsvConfig::default())
}
