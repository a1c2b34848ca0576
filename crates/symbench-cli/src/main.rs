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

//! SymBench Command Line Interface

use clap::Parser;
use std::process::ExitCode;
use symbench_cli::cli::Commands;
use tracing_subscriber::EnvFilter;

/// SymBench - parallel keyword-count benchmark analysis
///
/// Reads the timing log and keyword count dumps written by the serial,
/// OpenMP, MPI and Hybrid counters and reports speedup and accuracy.
///
/// # Examples
///
/// ```bash
/// # Speedup table from outputs/performance.txt
/// symbench performance
///
/// # Accuracy against the serial counts, as Markdown
/// symbench accuracy --format markdown
///
/// # Both reports plus SVG charts
/// symbench report --charts plots/
/// ```
#[derive(Parser)]
#[command(name = "symbench")]
#[command(author, version, about = "SymBench - parallel keyword-count benchmark analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the reports.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("symbench=info".parse().expect("valid log directive")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
