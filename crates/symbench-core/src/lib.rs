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

//! Log parsing and metrics for parallel keyword-count benchmarks.
//!
//! A keyword-counting workload is run four ways (serial, OpenMP, MPI and a
//! hybrid of both). Each run appends its wall time to a shared timing log and
//! writes its per-keyword counts to a dump. This crate turns those flat text
//! artifacts into comparable numbers:
//!
//! - **Performance**: elapsed time and speedup relative to the fastest serial run
//! - **Accuracy**: exact-match percentage, MAE and RMSE of each accelerated
//!   variant's counts against the serial ground truth
//!
//! # Pipeline
//!
//! The stages are independent functions composed by the caller:
//!
//! ```text
//! parse    parse_performance_log / parse_result_counts
//! compute  analyze_performance / analyze_accuracy
//! render   render_performance / render_accuracy (+ chart data)
//! ```
//!
//! # Example
//!
//! ```
//! use symbench_core::{
//!     analyze_accuracy, analyze_performance, parse_performance_log, parse_result_counts,
//!     render_performance, Method, ReportFormat,
//! };
//!
//! # fn main() -> symbench_core::Result<()> {
//! let log = "\
//! Serial version time: 4.000000 seconds\t No. of Processors: 1\t No. of Threads: 1
//! OpenMP version time: 1.000000 seconds\t No. of Processors: 1\t No. of Threads: 4
//! ";
//! let perf = analyze_performance(parse_performance_log(log)?);
//! assert_eq!(perf.records[1].speedup, 4.0);
//! println!("{}", render_performance(&perf.records, ReportFormat::Text)?);
//!
//! let serial = parse_result_counts("fever: 10\ncough: 5\n")?;
//! let openmp = parse_result_counts("fever: 10\ncough: 3\n")?;
//! let accuracy = analyze_accuracy(&serial, &[(Method::OpenMp, &openmp)])?;
//! assert_eq!(accuracy.metrics[0].percent_exact_match, 50.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Missing or unreadable files, malformed counts and an empty serial keyword
//! set abort with a [`SymbenchError`]. Lines that do not match an expected
//! pattern are skipped silently.

mod analysis;
mod chart;
mod config;
mod counts;
mod error;
mod files;
mod method;
mod metrics;
mod perf;
mod report;

pub use analysis::{analyze_accuracy, analyze_performance, AccuracyAnalysis, PerformanceAnalysis};
pub use chart::{
    accuracy_chart, draw_all, performance_charts, ChartData, ChartSeries, ChartSink, SeriesKind,
};
pub use config::{
    default_result_path, max_file_size_from_env, AnalysisConfig, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_PERFORMANCE_PATH, MAX_FILE_SIZE_ENV,
};
pub use counts::{parse_result_counts, KeywordCounts};
pub use error::{Result, SymbenchError};
pub use files::{
    load_configured_counts, load_configured_performance, load_performance_log,
    load_result_counts, read_input,
};
pub use method::{config_label, config_label_for_token, Method, SERIAL_LABEL};
pub use metrics::{
    compute_metrics, mean_absolute_error, percent_exact_match, root_mean_square_error,
    speedup_ratio, AccuracyMetrics, KeySetDivergence,
};
pub use perf::{
    normalize_speedups, parse_performance_log, parse_performance_log_with_rules, ExclusionRule,
    PerformanceRecord, EXCLUDED_HYBRID_CONFIG,
};
pub use report::{
    accuracy_table, divergence_notes, performance_table, render_accuracy, render_performance,
    render_report, DivergenceNote, ReportFormat,
};
