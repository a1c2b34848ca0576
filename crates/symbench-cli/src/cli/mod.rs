// Dweve SymBench - Parallel Keyword-Count Benchmark Analysis
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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by category:
//!
//! - [`report`]: analysis reports (performance, accuracy, report)
//! - [`utility`]: supporting tools (preprocess)

mod args;
mod report;
mod utility;

use crate::error::CliError;
use clap::Subcommand;

pub use args::{CountInputs, OutputArgs, PerformanceInput};
pub use report::ReportCommands;
pub use utility::UtilityCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Report (performance, accuracy, report)
/// └── Utility (preprocess)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use symbench_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Report commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns the first failure of any pipeline stage; no partial report is
    /// printed for the stage that failed.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
