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

//! Command-line argument definitions.
//!
//! Global flags configure loading and labelling for every subcommand. Each
//! subcommand picks which tables to compare and where to write the reports.

use crate::commands::{self, RunOptions};
use crate::error::CliError;
use clap::{Args, Subcommand};
use parity_report::ReportConfig;
use parity_tsv::{DuplicatePolicy, FromTsvConfig};
use std::path::PathBuf;

/// Flags shared by all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Display name of the reference source
    #[arg(long, global = true, default_value = "Reference", value_name = "LABEL")]
    pub reference_label: String,

    /// Display name of the candidate source
    #[arg(long, global = true, default_value = "Candidate", value_name = "LABEL")]
    pub candidate_label: String,

    /// Fail when a name repeats within one table instead of keeping the last row
    #[arg(long, global = true)]
    pub reject_duplicates: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Loader and report settings derived from the flags and environment.
    pub fn run_options(&self) -> RunOptions {
        let duplicates = if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWriteWins
        };

        RunOptions {
            load: FromTsvConfig::from_env().with_duplicates(duplicates),
            report: ReportConfig::default()
                .with_labels(self.reference_label.clone(), self.candidate_label.clone()),
        }
    }
}

/// Paths for a single comparison.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Reference results table
    #[arg(long, value_name = "TSV")]
    pub reference: PathBuf,

    /// Candidate results table
    #[arg(long, value_name = "TSV")]
    pub candidate: PathBuf,

    /// Markdown report path
    #[arg(short, long, value_name = "MD")]
    pub output: PathBuf,

    /// Also write the reconciled state as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare functional results of two sources
    ///
    /// Cases are aligned by name. A case diverges when status, compile outcome
    /// or match outcome differ, or when both sources verified the full match
    /// span and disagree on it.
    Functional(CompareArgs),

    /// Compare performance results of two sources
    ///
    /// Scenarios are aligned by name. Status and matched outcome are compared;
    /// throughput is reported as a ratio and never counts as a mismatch.
    Performance(CompareArgs),

    /// Compare both tables found in a results directory
    ///
    /// Reads functional_reference.tsv, functional_candidate.tsv,
    /// performance_reference.tsv and performance_candidate.tsv and writes
    /// functionality_comparison.md and performance_comparison.md next to them.
    All {
        /// Directory holding the four result tables
        #[arg(long, value_name = "DIR")]
        results_dir: PathBuf,

        /// Also write .json exports next to the reports
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Runs the subcommand.
    ///
    /// Succeeds whenever the reports were written, divergence included.
    pub fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let options = global.run_options();
        match self {
            Commands::Functional(args) => commands::functional(
                &args.reference,
                &args.candidate,
                &args.output,
                args.json.as_deref(),
                &options,
            )
            .map(|_| ()),
            Commands::Performance(args) => commands::performance(
                &args.reference,
                &args.candidate,
                &args.output,
                args.json.as_deref(),
                &options,
            )
            .map(|_| ()),
            Commands::All { results_dir, json } => commands::all(&results_dir, json, &options),
        }
    }
}
