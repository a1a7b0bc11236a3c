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

//! Library side of the `parity` command-line tool.
//!
//! The binary loads a reference and a candidate result table, reconciles
//! them and writes divergence reports. Every step is exposed here so it can
//! be driven from tests or other tools.
//!
//! # Commands
//!
//! - **functional**: compare two functional tables
//! - **performance**: compare two performance tables
//! - **all**: compare both kinds found in a results directory
//!
//! # Examples
//!
//! ```no_run
//! use parity_cli::commands::{all, RunOptions};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), parity_cli::error::CliError> {
//! all(Path::new("results"), true, &RunOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
