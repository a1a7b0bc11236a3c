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

//! Typed benchmark records produced by one source.
//!
//! Both record kinds are keyed by `name`. Two records from different sources
//! with the same name describe the same logical case or scenario.

use serde::{Deserialize, Serialize};

/// Status tag a producer writes for a passing case.
pub const PASS_STATUS: &str = "PASS";

/// Access to the alignment key of a record.
pub trait Keyed {
    /// Returns the case or scenario name.
    fn name(&self) -> &str;
}

/// Outcome of one named functional test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalRecord {
    /// Case name, unique within one source.
    pub name: String,
    /// Whether the pattern is expected to compile.
    pub should_compile: bool,
    /// Whether the pattern compiled.
    pub compile_ok: bool,
    /// Whether the pattern is expected to match.
    pub should_match: bool,
    /// Whether the pattern matched.
    pub actual_match: bool,
    /// Whether full-span verification was requested for this case.
    pub verify_full_match: bool,
    /// Observed full-span verification outcome.
    ///
    /// Only meaningful when `verify_full_match` is set.
    pub match_verified: bool,
    /// Compile time in nanoseconds.
    pub compile_ns: u64,
    /// Match time in nanoseconds.
    pub match_ns: u64,
    /// Free-form outcome tag such as `PASS` or `FAIL`.
    pub status: String,
    /// Free text, possibly empty.
    pub notes: String,
}

impl FunctionalRecord {
    /// Creates a record with the given name and status and every flag cleared.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            should_compile: false,
            compile_ok: false,
            should_match: false,
            actual_match: false,
            verify_full_match: false,
            match_verified: false,
            compile_ns: 0,
            match_ns: 0,
            status: status.into(),
            notes: String::new(),
        }
    }

    /// Returns whether the producer marked this case as passing.
    pub fn is_pass(&self) -> bool {
        self.status == PASS_STATUS
    }
}

impl Keyed for FunctionalRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Outcome of one named performance scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Scenario name, unique within one source.
    pub name: String,
    /// Expression under test. Informational only.
    pub pattern: String,
    /// Size of the haystack in bytes.
    pub text_size: u64,
    /// Number of timed match iterations.
    pub iterations: u64,
    /// Compile time in nanoseconds.
    pub compile_ns: u64,
    /// Total match time across all iterations in nanoseconds.
    pub match_total_ns: u64,
    /// Average match time per iteration in nanoseconds.
    pub match_avg_ns: u64,
    /// Throughput in MB/s. Zero is a measured value, not a missing one.
    pub throughput_mb_s: f64,
    /// Whether the pattern matched the haystack.
    pub matched: bool,
    /// Free-form outcome tag.
    pub status: String,
    /// Free text, possibly empty.
    pub notes: String,
}

impl PerformanceRecord {
    /// Creates a record with the given name and status and zeroed measurements.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: String::new(),
            text_size: 0,
            iterations: 0,
            compile_ns: 0,
            match_total_ns: 0,
            match_avg_ns: 0,
            throughput_mb_s: 0.0,
            matched: false,
            status: status.into(),
            notes: String::new(),
        }
    }
}

impl Keyed for PerformanceRecord {
    fn name(&self) -> &str {
        &self.name
    }
}
