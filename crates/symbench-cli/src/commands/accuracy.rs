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

//! Accuracy command - count agreement with the serial reference

use super::{print_output, write_charts};
use crate::error::CliError;
use std::path::Path;
use symbench_core::{
    accuracy_chart, analyze_accuracy, load_configured_counts, render_accuracy, AccuracyAnalysis,
    AnalysisConfig, KeywordCounts, Method, ReportFormat,
};

/// Load all four count dumps and compare the accelerated ones to Serial.
///
/// Every file is loaded before any metric is computed, so a missing dump
/// fails the parse stage even if it belongs to the last method.
///
/// # Errors
///
/// - parse stage: a dump is missing, too large or has a non-integer count
/// - metrics stage: the serial dump holds no keywords
pub fn accuracy_report(config: &AnalysisConfig) -> Result<AccuracyAnalysis, CliError> {
    let serial = load_configured_counts(config, Method::Serial).map_err(CliError::parse)?;
    let candidates = Method::ACCELERATED
        .into_iter()
        .map(|method| {
            load_configured_counts(config, method)
                .map(|counts| (method, counts))
                .map_err(CliError::parse)
        })
        .collect::<Result<Vec<(Method, KeywordCounts)>, CliError>>()?;

    let borrowed: Vec<(Method, &KeywordCounts)> =
        candidates.iter().map(|(m, c)| (*m, c)).collect();
    analyze_accuracy(&serial, &borrowed).map_err(CliError::metrics)
}

/// Print the accuracy report and optionally write its chart.
pub fn accuracy(
    config: &AnalysisConfig,
    format: ReportFormat,
    charts: Option<&Path>,
) -> Result<(), CliError> {
    let analysis = accuracy_report(config)?;
    let rendered =
        render_accuracy(&analysis.metrics, &analysis.notes, format).map_err(CliError::render)?;
    print_output(&rendered)?;
    write_charts(charts, &[accuracy_chart(&analysis.metrics)])
}
