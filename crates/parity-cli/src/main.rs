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

//! `parity` command-line interface.

use clap::Parser;
use colored::Colorize;
use parity_cli::cli::{Commands, GlobalArgs};
use parity_cli::logging;
use std::process::ExitCode;

/// Reconcile regex benchmark results from a reference and a candidate engine
///
/// Loads tab-delimited result tables, aligns cases and scenarios by name and
/// writes Markdown reports describing where the two engines diverge.
///
/// # Examples
///
/// ```bash
/// # Compare everything in a results directory
/// parity all --results-dir results --json
///
/// # Compare one pair of functional tables with custom labels
/// parity functional --reference odin.tsv --candidate rust.tsv -o report.md \
///     --reference-label "Odin RE2" --candidate-label "Rust regex"
/// ```
#[derive(Parser)]
#[command(name = "parity")]
#[command(author, version, about = "Reconcile regex benchmark results from two engines", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match cli.command.execute(&cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
