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

//! Performance command - execution time and speedup report

use super::{print_output, write_charts};
use crate::error::CliError;
use std::path::Path;
use symbench_core::{
    analyze_performance, load_configured_performance, performance_charts, render_performance,
    AnalysisConfig, PerformanceAnalysis, ReportFormat,
};
use tracing::info;

/// Load the timing log and compute speedups.
///
/// # Errors
///
/// Fails in the parse stage when the log is missing, too large or carries a
/// malformed number in an otherwise matching block.
pub fn performance_report(config: &AnalysisConfig) -> Result<PerformanceAnalysis, CliError> {
    let records = load_configured_performance(config).map_err(CliError::parse)?;
    let analysis = analyze_performance(records);
    info!(
        records = analysis.records.len(),
        baseline_seconds = analysis.baseline_seconds,
        "computed speedups"
    );
    Ok(analysis)
}

/// Print the performance report and optionally write its charts.
///
/// # Examples
///
/// ```no_run
/// use symbench_cli::commands::performance;
/// use symbench_core::{AnalysisConfig, ReportFormat};
///
/// # fn main() -> Result<(), symbench_cli::error::CliError> {
/// let config = AnalysisConfig::default().with_performance_path("runs/perf.txt");
/// performance(&config, ReportFormat::Markdown, None)?;
/// # Ok(())
/// # }
/// ```
pub fn performance(
    config: &AnalysisConfig,
    format: ReportFormat,
    charts: Option<&Path>,
) -> Result<(), CliError> {
    let analysis = performance_report(config)?;
    let rendered = render_performance(&analysis.records, format).map_err(CliError::render)?;
    print_output(&rendered)?;
    write_charts(charts, &performance_charts(&analysis.records))
}
