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

//! Write record tables back out in the canonical column order.

use crate::error::{Result, TsvError};
use crate::from_tsv::TsvSchema;
use parity_core::{FunctionalRecord, PerformanceRecord, RecordTable};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Configuration for table writing.
#[derive(Debug, Clone)]
pub struct ToTsvConfig {
    /// Field delimiter (default: tab).
    pub delimiter: u8,
    /// Whether to emit the header row (default: true).
    pub include_headers: bool,
}

impl Default for ToTsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            include_headers: true,
        }
    }
}

/// Writes records of any schema to a writer.
pub fn write_records<'a, S, I, W>(records: I, writer: W, config: &ToTsvConfig) -> Result<()>
where
    S: TsvSchema + 'a,
    I: IntoIterator<Item = &'a S>,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(S::COLUMNS)?;
    }
    for record in records {
        wtr.write_record(record.to_row())?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes a functional table to a writer.
pub fn write_functional<W: Write>(table: &RecordTable<FunctionalRecord>, writer: W) -> Result<()> {
    write_records(table.records(), writer, &ToTsvConfig::default())
}

/// Writes a performance table to a writer.
pub fn write_performance<W: Write>(
    table: &RecordTable<PerformanceRecord>,
    writer: W,
) -> Result<()> {
    write_records(table.records(), writer, &ToTsvConfig::default())
}

/// Renders a functional table as TSV text.
pub fn functional_to_string(table: &RecordTable<FunctionalRecord>) -> Result<String> {
    let mut buf = Vec::new();
    write_functional(table, &mut buf)?;
    String::from_utf8(buf).map_err(|e| TsvError::Parse {
        row: 0,
        message: e.to_string(),
    })
}

/// Renders a performance table as TSV text.
pub fn performance_to_string(table: &RecordTable<PerformanceRecord>) -> Result<String> {
    let mut buf = Vec::new();
    write_performance(table, &mut buf)?;
    String::from_utf8(buf).map_err(|e| TsvError::Parse {
        row: 0,
        message: e.to_string(),
    })
}

/// Saves a table of any schema to a file.
pub fn save_table<S: TsvSchema>(table: &RecordTable<S>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TsvError::io(path, e))?;
    write_records(table.records(), file, &ToTsvConfig::default())
}
