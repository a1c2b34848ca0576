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

//! Centralized analysis configuration.
//!
//! Input locations default to the relative paths the counting
//! implementations write to, so a run needs no arguments at all.

use crate::method::Method;
use crate::perf::ExclusionRule;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default location of the shared timing log.
pub const DEFAULT_PERFORMANCE_PATH: &str = "outputs/performance.txt";

/// Default maximum input file size (100 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`] (bytes).
pub const MAX_FILE_SIZE_ENV: &str = "SYMBENCH_MAX_FILE_SIZE";

/// Default location of a method's keyword count dump.
pub fn default_result_path(method: Method) -> PathBuf {
    let stem = match method {
        Method::Serial => "serial",
        Method::OpenMp => "openmp",
        Method::Mpi => "mpi",
        Method::Hybrid => "hybrid",
    };
    PathBuf::from(format!("outputs/result_{}.txt", stem))
}

/// Read the size limit from [`MAX_FILE_SIZE_ENV`], falling back to the default
/// when the variable is unset or not a valid integer.
pub fn max_file_size_from_env() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Where inputs live and how they are curated.
///
/// # Example
///
/// ```
/// use symbench_core::{AnalysisConfig, Method};
///
/// let config = AnalysisConfig::default()
///     .with_performance_path("logs/perf.txt")
///     .with_result_path(Method::Mpi, "logs/mpi.txt");
///
/// assert_eq!(config.performance_path.to_str(), Some("logs/perf.txt"));
/// assert_eq!(config.result_path(Method::Mpi).to_str(), Some("logs/mpi.txt"));
/// assert_eq!(config.result_path(Method::Serial).to_str(), Some("outputs/result_serial.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Timing log path.
    pub performance_path: PathBuf,
    /// Keyword count dump per method.
    pub result_paths: BTreeMap<Method, PathBuf>,
    /// Records dropped after parsing the timing log.
    pub exclusions: Vec<ExclusionRule>,
    /// Inputs larger than this are rejected before reading.
    pub max_file_size: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            performance_path: PathBuf::from(DEFAULT_PERFORMANCE_PATH),
            result_paths: Method::ALL
                .into_iter()
                .map(|m| (m, default_result_path(m)))
                .collect(),
            exclusions: ExclusionRule::defaults(),
            max_file_size: max_file_size_from_env(),
        }
    }
}

impl AnalysisConfig {
    /// Sets the timing log path.
    pub fn with_performance_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.performance_path = path.into();
        self
    }

    /// Sets the count dump path of one method.
    pub fn with_result_path(mut self, method: Method, path: impl Into<PathBuf>) -> Self {
        self.result_paths.insert(method, path.into());
        self
    }

    /// Replaces the exclusion rules.
    pub fn with_exclusions(mut self, rules: Vec<ExclusionRule>) -> Self {
        self.exclusions = rules;
        self
    }

    /// Sets the maximum input size in bytes.
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// Count dump path of `method`.
    pub fn result_path(&self, method: Method) -> PathBuf {
        self.result_paths
            .get(&method)
            .cloned()
            .unwrap_or_else(|| default_result_path(method))
    }

    /// Timing log path.
    pub fn performance_path(&self) -> &Path {
        &self.performance_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = AnalysisConfig::default();
        assert_eq!(config.performance_path(), Path::new("outputs/performance.txt"));
        assert_eq!(
            config.result_path(Method::OpenMp),
            PathBuf::from("outputs/result_openmp.txt")
        );
        assert_eq!(
            config.result_path(Method::Hybrid),
            PathBuf::from("outputs/result_hybrid.txt")
        );
    }

    #[test]
    fn test_default_exclusions() {
        let config = AnalysisConfig::default();
        assert_eq!(config.exclusions, ExclusionRule::defaults());
    }

    #[test]
    fn test_builders() {
        let config = AnalysisConfig::default()
            .with_exclusions(Vec::new())
            .with_max_file_size(1024);
        assert!(config.exclusions.is_empty());
        assert_eq!(config.max_file_size, 1024);
    }
}
