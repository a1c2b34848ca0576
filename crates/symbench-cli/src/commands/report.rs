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

//! Report command - performance then accuracy

use super::{accuracy_report, performance_report, print_output, write_charts};
use crate::error::CliError;
use std::path::Path;
use symbench_core::{
    accuracy_chart, performance_charts, render_report, AnalysisConfig, ReportFormat,
};

/// Print both reports.
///
/// Both analyses complete before anything is printed, so a failure in either
/// leaves stdout empty. JSON output is a single object with `performance` and
/// `accuracy` members.
pub fn report(
    config: &AnalysisConfig,
    format: ReportFormat,
    charts: Option<&Path>,
) -> Result<(), CliError> {
    let perf = performance_report(config)?;
    let acc = accuracy_report(config)?;

    let combined = render_report(&perf.records, &acc.metrics, &acc.notes, format)
        .map_err(CliError::render)?;
    print_output(&combined)?;

    let mut figures = performance_charts(&perf.records);
    figures.push(accuracy_chart(&acc.metrics));
    write_charts(charts, &figures)
}
