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

//! Canned tables and raw TSV text.

use crate::builders::{case, scenario};
use parity_core::{FunctionalRecord, PerformanceRecord, RecordTable};

/// Header row of the functional schema.
pub const FUNCTIONAL_HEADER: &str = "name\tshould_compile\tcompile_ok\tshould_match\tactual_match\tverify_full_match\tmatch_verified\tcompile_ns\tmatch_ns\tstatus\tnotes";

/// Header row of the performance schema.
pub const PERFORMANCE_HEADER: &str = "name\tpattern\ttext_size\titerations\tcompile_ns\tmatch_total_ns\tmatch_avg_ns\tthroughput_mb_s\tmatched\tstatus\tnotes";

/// Joins a header and rows into TSV text with a trailing newline.
pub fn tsv(header: &str, rows: &[&str]) -> String {
    let mut out = String::with_capacity(header.len() + rows.len() * 64);
    out.push_str(header);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Reference functional results: three cases, one verified.
pub fn functional_reference_tsv() -> String {
    tsv(
        FUNCTIONAL_HEADER,
        &[
            "lit1\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\t1200\t300\tPASS\t",
            "anchor\ttrue\ttrue\ttrue\ttrue\ttrue\ttrue\t900\t150\tPASS\tspan ok",
            "bad_class\tfalse\tfalse\tfalse\tfalse\tfalse\tfalse\t80\t0\tPASS\texpected error",
        ],
    )
}

/// Candidate functional results: `lit1` disagrees, `bad_class` is absent and
/// `unicode` only exists here.
pub fn functional_candidate_tsv() -> String {
    tsv(
        FUNCTIONAL_HEADER,
        &[
            "lit1\ttrue\ttrue\ttrue\tfalse\tfalse\tfalse\t1100\t280\tFAIL\tno match | wrong span",
            "anchor\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\t950\t160\tPASS\t",
            "unicode\ttrue\ttrue\ttrue\ttrue\tfalse\tfalse\t2000\t400\tPASS\t",
        ],
    )
}

/// Reference performance results.
pub fn performance_reference_tsv() -> String {
    tsv(
        PERFORMANCE_HEADER,
        &[
            "literal\tabc\t1048576\t100\t5000\t20000000\t200000\t5000.00\ttrue\tPASS\t",
            "alternation\tfoo|bar\t1048576\t100\t8000\t40000000\t400000\t2500.00\ttrue\tPASS\t",
            "backtrack\t(a+)+b\t65536\t10\t3000\t100000\t10000\t5.00\tfalse\tPASS\t",
        ],
    )
}

/// Candidate performance results: `backtrack` timed out with zero throughput.
pub fn performance_candidate_tsv() -> String {
    tsv(
        PERFORMANCE_HEADER,
        &[
            "literal\tabc\t1048576\t100\t4000\t10000000\t100000\t10000.00\ttrue\tPASS\t",
            "alternation\tfoo|bar\t1048576\t100\t7000\t40000000\t400000\t2500.00\ttrue\tPASS\t",
            "backtrack\t(a+)+b\t65536\t10\t3000\t0\t0\t\tfalse\tTIMEOUT\tgave up",
        ],
    )
}

/// Builds a table from records.
pub fn table<R: parity_core::Keyed>(records: Vec<R>) -> RecordTable<R> {
    records.into_iter().collect()
}

/// Reference functional table matching [`functional_reference_tsv`].
pub fn functional_reference() -> RecordTable<FunctionalRecord> {
    table(vec![
        case("lit1").timings(1200, 300).build(),
        case("anchor").verified(true).timings(900, 150).notes("span ok").build(),
        case("bad_class")
            .compile(false, false)
            .matched(false, false)
            .timings(80, 0)
            .notes("expected error")
            .build(),
    ])
}

/// Generates `count` scenario records for one source.
///
/// `scale` multiplies every throughput so two sources built with different
/// scales produce a known ratio.
pub fn generate_scenarios(count: usize, scale: f64) -> Vec<PerformanceRecord> {
    (0..count)
        .map(|i| {
            scenario(format!("scenario_{:05}", i))
                .size(1024 * (i as u64 % 64 + 1), 10 + i as u64 % 5)
                .avg_ns(1_000 + i as u64)
                .throughput((i % 100) as f64 * scale)
                .matched(i % 7 != 0)
                .build()
        })
        .collect()
}
