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

//! CLI command implementations

mod accuracy;
mod performance;
mod preprocess;
mod report;

pub use accuracy::{accuracy, accuracy_report};
pub use performance::{performance, performance_report};
pub use preprocess::preprocess;
pub use report::report;

use crate::charts::SvgChartSink;
use crate::error::CliError;
use std::io::{self, Write};
use std::path::Path;
use symbench_core::{draw_all, ChartData};

/// Write `text` to stdout, ending with exactly one newline.
pub(crate) fn print_output(text: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.trim_end_matches('\n').as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))
}

/// Draw `charts` as SVG files into `dir` when a directory was requested.
pub(crate) fn write_charts(dir: Option<&Path>, charts: &[ChartData]) -> Result<(), CliError> {
    let Some(dir) = dir else {
        return Ok(());
    };
    let mut sink = SvgChartSink::new(dir)?;
    draw_all(&mut sink, charts).map_err(CliError::render)
}
