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

//! Analysis report commands.

use super::args::{CountInputs, OutputArgs, PerformanceInput};
use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use symbench_core::AnalysisConfig;

/// Report commands.
///
/// Every input path is optional and falls back to the location the counting
/// programs write to.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Execution time and speedup of every recorded run
    ///
    /// Speedups are relative to the fastest Serial run in the log. The Hybrid
    /// 8x2 configuration is left out.
    Performance {
        #[command(flatten)]
        input: PerformanceInput,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Accuracy of OpenMP, MPI and Hybrid counts against the Serial counts
    ///
    /// Reports exact-match percentage, mean absolute error and root mean
    /// square error. Keyword set differences are listed below the table.
    Accuracy {
        #[command(flatten)]
        input: CountInputs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Performance report followed by the accuracy report
    Report {
        #[command(flatten)]
        log: PerformanceInput,

        #[command(flatten)]
        counts: CountInputs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

impl ReportCommands {
    /// Execute the report command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportCommands::Performance { input, output } => {
                let config = input.apply(AnalysisConfig::default());
                commands::performance(&config, output.format, output.charts.as_deref())
            }
            ReportCommands::Accuracy { input, output } => {
                let config = input.apply(AnalysisConfig::default());
                commands::accuracy(&config, output.format, output.charts.as_deref())
            }
            ReportCommands::Report {
                log,
                counts,
                output,
            } => {
                let config = counts.apply(log.apply(AnalysisConfig::default()));
                commands::report(&config, output.format, output.charts.as_deref())
            }
        }
    }
}
