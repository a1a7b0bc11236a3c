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

//! Name-keyed record tables and cross-source alignment.

use crate::record::Keyed;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Coercions applied while a table was loaded.
///
/// Lenient parsing never fails on these, but the counts are carried into the
/// report so silent coercion stays visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDiagnostics {
    /// Number of data rows read.
    pub rows_read: usize,
    /// Names whose earlier row was overwritten, in overwrite order.
    pub duplicate_names: Vec<String>,
    /// Boolean cells holding an unrecognized token that resolved to false.
    pub coerced_booleans: usize,
}

impl TableDiagnostics {
    /// Returns whether any coercion was applied.
    pub fn has_warnings(&self) -> bool {
        !self.duplicate_names.is_empty() || self.coerced_booleans > 0
    }
}

/// Records from one source, ordered by name.
#[derive(Debug, Clone)]
pub struct RecordTable<R> {
    records: BTreeMap<String, R>,
    diagnostics: TableDiagnostics,
}

impl<R> Default for RecordTable<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            diagnostics: TableDiagnostics::default(),
        }
    }
}

impl<R: Keyed> RecordTable<R> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any earlier record with the same name.
    ///
    /// The replaced record is returned and its name is recorded in the
    /// diagnostics.
    pub fn insert(&mut self, record: R) -> Option<R> {
        let name = record.name().to_string();
        let previous = self.records.insert(name.clone(), record);
        if previous.is_some() {
            self.diagnostics.duplicate_names.push(name);
        }
        previous
    }

    /// Returns the record with the given name.
    pub fn get(&self, name: &str) -> Option<&R> {
        self.records.get(name)
    }

    /// Returns whether a record with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in name order.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn diagnostics(&self) -> &TableDiagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut TableDiagnostics {
        &mut self.diagnostics
    }
}

impl<R: Keyed> FromIterator<R> for RecordTable<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

/// One name from the union of two tables.
#[derive(Debug)]
pub enum Aligned<'a, R> {
    /// Present in both sources.
    Both(&'a R, &'a R),
    /// Present only in the reference source.
    ReferenceOnly(&'a str),
    /// Present only in the candidate source.
    CandidateOnly(&'a str),
}

/// Walks the union of names of both tables in lexicographic order.
pub fn align<'a, R: Keyed>(
    reference: &'a RecordTable<R>,
    candidate: &'a RecordTable<R>,
) -> impl Iterator<Item = Aligned<'a, R>> {
    let names: BTreeSet<&'a str> = reference.names().chain(candidate.names()).collect();

    names
        .into_iter()
        .map(move |name| match (reference.get(name), candidate.get(name)) {
            (Some(r), Some(c)) => Aligned::Both(r, c),
            (Some(_), None) => Aligned::ReferenceOnly(name),
            _ => Aligned::CandidateOnly(name),
        })
}
