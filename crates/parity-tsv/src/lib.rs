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

//! Tab-delimited result files ↔ typed record tables.
//!
//! Each benchmark source writes one functional table and one performance
//! table. This crate loads them into [`parity_core::RecordTable`]s keyed by
//! name and can write tables back out in the canonical column order.
//!
//! # Features
//!
//! - **Header-driven**: columns are located by name, so extra or reordered
//!   columns are accepted
//! - **Lenient booleans**: `true`, `1` and `yes` in any case are true and
//!   everything else is false
//! - **Strict integers**: a bad timing cell fails the load with its row and
//!   field
//! - **Diagnostics**: duplicate names and coerced booleans are recorded on
//!   the table instead of being silently dropped
//!
//! # Examples
//!
//! ```
//! use parity_tsv::functional_from_str;
//!
//! let tsv = "name\tcompile_ok\tcompile_ns\tmatch_ns\tstatus\n\
//!            lit1\ttrue\t1200\t300\tPASS\n";
//! let table = functional_from_str(tsv).unwrap();
//!
//! let record = table.get("lit1").unwrap();
//! assert!(record.compile_ok);
//! assert_eq!(record.match_ns, 300);
//! assert_eq!(record.notes, "");
//! ```
//!
//! ## Rejecting duplicates
//!
//! ```
//! use parity_tsv::{functional_from_reader, DuplicatePolicy, FromTsvConfig, TsvError};
//!
//! let tsv = "name\tcompile_ns\tmatch_ns\tstatus\na\t1\t1\tPASS\na\t2\t2\tFAIL\n";
//! let config = FromTsvConfig::default().with_duplicates(DuplicatePolicy::Reject);
//!
//! let err = functional_from_reader(tsv.as_bytes(), &config).unwrap_err();
//! assert!(matches!(err, TsvError::DuplicateName { row: 2, .. }));
//! ```

mod error;
mod from_tsv;
mod to_tsv;

pub use error::{Result, TsvError};
pub use from_tsv::{
    functional_from_reader, functional_from_str, load_functional, load_performance, load_table,
    parse_bool, performance_from_reader, performance_from_str, table_from_reader,
    DuplicatePolicy, FromTsvConfig, Row, TsvSchema, DEFAULT_MAX_ROWS, MAX_ROWS_ENV, TRUE_TOKENS,
};
pub use to_tsv::{
    functional_to_string, performance_to_string, save_table, write_functional,
    write_performance, write_records, ToTsvConfig,
};
