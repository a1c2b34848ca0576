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

//! Size-checked file loading.
//!
//! Each loader reads its input once, fully, and releases the handle before
//! returning. Parse errors are re-attributed to the file they came from.

use crate::config::AnalysisConfig;
use crate::counts::{parse_result_counts, KeywordCounts};
use crate::error::{Result, SymbenchError};
use crate::method::Method;
use crate::perf::{parse_performance_log_with_rules, ExclusionRule, PerformanceRecord};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a whole file after checking it against `max_size`.
///
/// # Errors
///
/// - [`SymbenchError::FileAccess`] if the file is missing, unreadable or not UTF-8
/// - [`SymbenchError::FileTooLarge`] if it exceeds `max_size` bytes
pub fn read_input(path: &Path, max_size: u64) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| SymbenchError::file_access(path, e))?;

    if metadata.len() > max_size {
        return Err(SymbenchError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: max_size,
        });
    }

    fs::read_to_string(path).map_err(|e| SymbenchError::file_access(path, e))
}

/// Load and parse a timing log.
pub fn load_performance_log(
    path: &Path,
    rules: &[ExclusionRule],
    max_size: u64,
) -> Result<Vec<PerformanceRecord>> {
    let text = read_input(path, max_size)?;
    let records = parse_performance_log_with_rules(&text, rules)
        .map_err(|e| e.with_origin(path.display().to_string()))?;
    info!(path = %path.display(), records = records.len(), "loaded performance log");
    Ok(records)
}

/// Load and parse a keyword count dump.
pub fn load_result_counts(path: &Path, max_size: u64) -> Result<KeywordCounts> {
    let text = read_input(path, max_size)?;
    let counts =
        parse_result_counts(&text).map_err(|e| e.with_origin(path.display().to_string()))?;
    info!(path = %path.display(), keywords = counts.len(), "loaded keyword counts");
    Ok(counts)
}

/// Load the timing log named by `config`.
pub fn load_configured_performance(config: &AnalysisConfig) -> Result<Vec<PerformanceRecord>> {
    load_performance_log(
        config.performance_path(),
        &config.exclusions,
        config.max_file_size,
    )
}

/// Load the count dump of `method` named by `config`.
pub fn load_configured_counts(config: &AnalysisConfig, method: Method) -> Result<KeywordCounts> {
    load_result_counts(&config.result_path(method), config.max_file_size)
}
