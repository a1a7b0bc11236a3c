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

//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Crates whose events are shown by default.
const CRATES: &[&str] = &["parity_core", "parity_tsv", "parity_report", "parity_cli"];

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    CRATES
        .iter()
        .map(|name| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
