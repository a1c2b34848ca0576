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

//! Argument groups shared by several commands.

use clap::Args;
use std::path::PathBuf;
use symbench_core::{AnalysisConfig, Method, ReportFormat};

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    s.parse::<ReportFormat>().map_err(|e| e.to_string())
}

/// Output options of every report command.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format (text, markdown, json)
    #[arg(short, long, default_value = "text", value_parser = parse_format)]
    pub format: ReportFormat,

    /// Write SVG charts into this directory
    #[arg(long, value_name = "DIR")]
    pub charts: Option<PathBuf>,
}

/// Timing log location.
#[derive(Args, Debug, Clone, Default)]
pub struct PerformanceInput {
    /// Timing log [default: outputs/performance.txt]
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

/// Keyword count dump locations.
#[derive(Args, Debug, Clone, Default)]
pub struct CountInputs {
    /// Serial counts [default: outputs/result_serial.txt]
    #[arg(long, value_name = "PATH")]
    pub serial: Option<PathBuf>,

    /// OpenMP counts [default: outputs/result_openmp.txt]
    #[arg(long, value_name = "PATH")]
    pub openmp: Option<PathBuf>,

    /// MPI counts [default: outputs/result_mpi.txt]
    #[arg(long, value_name = "PATH")]
    pub mpi: Option<PathBuf>,

    /// Hybrid counts [default: outputs/result_hybrid.txt]
    #[arg(long, value_name = "PATH")]
    pub hybrid: Option<PathBuf>,
}

impl PerformanceInput {
    /// Apply the override, if any, to `config`.
    pub fn apply(self, config: AnalysisConfig) -> AnalysisConfig {
        match self.log {
            Some(path) => config.with_performance_path(path),
            None => config,
        }
    }
}

impl CountInputs {
    /// Apply every given override to `config`.
    pub fn apply(self, config: AnalysisConfig) -> AnalysisConfig {
        [
            (Method::Serial, self.serial),
            (Method::OpenMp, self.openmp),
            (Method::Mpi, self.mpi),
            (Method::Hybrid, self.hybrid),
        ]
        .into_iter()
        .fold(config, |config, (method, path)| match path {
            Some(path) => config.with_result_path(method, path),
            None => config,
        })
    }
}
