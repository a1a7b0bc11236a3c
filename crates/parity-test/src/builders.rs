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

//! Fluent builders for test records.

use parity_core::{FunctionalRecord, PerformanceRecord};

/// Builder for [`FunctionalRecord`].
///
/// Starts from a passing case that compiled and matched.
#[derive(Debug, Clone)]
pub struct FunctionalRecordBuilder {
    record: FunctionalRecord,
}

impl FunctionalRecordBuilder {
    /// Creates a builder for a passing, compiling, matching case.
    pub fn new(name: impl Into<String>) -> Self {
        let mut record = FunctionalRecord::new(name, "PASS");
        record.should_compile = true;
        record.compile_ok = true;
        record.should_match = true;
        record.actual_match = true;
        Self { record }
    }

    /// Sets the status tag.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.record.status = status.into();
        self
    }

    /// Sets expected and observed compile outcome.
    pub fn compile(mut self, should: bool, ok: bool) -> Self {
        self.record.should_compile = should;
        self.record.compile_ok = ok;
        self
    }

    /// Sets expected and observed match outcome.
    pub fn matched(mut self, should: bool, actual: bool) -> Self {
        self.record.should_match = should;
        self.record.actual_match = actual;
        self
    }

    /// Requests full-span verification with the given outcome.
    pub fn verified(mut self, outcome: bool) -> Self {
        self.record.verify_full_match = true;
        self.record.match_verified = outcome;
        self
    }

    /// Sets observed verification without requesting it.
    pub fn unrequested_verification(mut self, outcome: bool) -> Self {
        self.record.verify_full_match = false;
        self.record.match_verified = outcome;
        self
    }

    /// Sets compile and match timings.
    pub fn timings(mut self, compile_ns: u64, match_ns: u64) -> Self {
        self.record.compile_ns = compile_ns;
        self.record.match_ns = match_ns;
        self
    }

    /// Sets the notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.record.notes = notes.into();
        self
    }

    pub fn build(self) -> FunctionalRecord {
        self.record
    }
}

/// Builder for [`PerformanceRecord`].
///
/// Starts from a passing, matching scenario over 1 KiB with 10 iterations.
#[derive(Debug, Clone)]
pub struct PerformanceRecordBuilder {
    record: PerformanceRecord,
}

impl PerformanceRecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let mut record = PerformanceRecord::new(name, "PASS");
        record.pattern = "a+b".to_string();
        record.text_size = 1024;
        record.iterations = 10;
        record.matched = true;
        Self { record }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.record.pattern = pattern.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.record.status = status.into();
        self
    }

    pub fn matched(mut self, matched: bool) -> Self {
        self.record.matched = matched;
        self
    }

    /// Sets text size and iteration count.
    pub fn size(mut self, text_size: u64, iterations: u64) -> Self {
        self.record.text_size = text_size;
        self.record.iterations = iterations;
        self
    }

    /// Sets the average match time and derives the total from the iteration count.
    pub fn avg_ns(mut self, avg_ns: u64) -> Self {
        self.record.match_avg_ns = avg_ns;
        self.record.match_total_ns = avg_ns * self.record.iterations;
        self
    }

    pub fn compile_ns(mut self, compile_ns: u64) -> Self {
        self.record.compile_ns = compile_ns;
        self
    }

    pub fn throughput(mut self, mb_s: f64) -> Self {
        self.record.throughput_mb_s = mb_s;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.record.notes = notes.into();
        self
    }

    pub fn build(self) -> PerformanceRecord {
        self.record
    }
}

/// Shorthand for [`FunctionalRecordBuilder::new`].
pub fn case(name: impl Into<String>) -> FunctionalRecordBuilder {
    FunctionalRecordBuilder::new(name)
}

/// Shorthand for [`PerformanceRecordBuilder::new`].
pub fn scenario(name: impl Into<String>) -> PerformanceRecordBuilder {
    PerformanceRecordBuilder::new(name)
}
