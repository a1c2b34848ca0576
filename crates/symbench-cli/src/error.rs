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

//! Structured error types for the SymBench CLI.
//!
//! Every failure carries the pipeline stage it happened in so the final
//! message tells the user where the run stopped.

use std::fmt;
use std::io;
use std::path::PathBuf;
use symbench_core::SymbenchError;
use symbench_csv::CsvError;
use thiserror::Error;

/// Pipeline stage a command was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading and parsing input files.
    Parse,
    /// Computing speedups or accuracy metrics.
    Metrics,
    /// Rendering tables or charts.
    Render,
    /// Converting the symptom dataset.
    Preprocess,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Parse => "parse",
            Stage::Metrics => "metrics",
            Stage::Render => "render",
            Stage::Preprocess => "preprocess",
        })
    }
}

/// Main error type for CLI operations.
///
/// # Examples
///
/// ```
/// use symbench_cli::error::{CliError, Stage};
/// use symbench_core::SymbenchError;
///
/// let err = CliError::metrics(SymbenchError::invalid_input("baseline keyword set is empty"));
/// assert_eq!(err.stage(), Some(Stage::Metrics));
/// assert_eq!(
///     err.to_string(),
///     "metrics stage failed: Invalid input: baseline keyword set is empty"
/// );
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// A core operation failed in `stage`.
    #[error("{stage} stage failed: {source}")]
    Core {
        /// Where the pipeline stopped
        stage: Stage,
        /// Underlying failure
        source: SymbenchError,
    },

    /// Dataset conversion failed.
    #[error("preprocess stage failed: {0}")]
    Preprocess(#[from] CsvError),

    /// An output location could not be prepared.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying I/O error message
        message: String,
    },
}

impl CliError {
    /// Failure while loading or parsing inputs.
    pub fn parse(source: SymbenchError) -> Self {
        Self::Core {
            stage: Stage::Parse,
            source,
        }
    }

    /// Failure while computing metrics.
    pub fn metrics(source: SymbenchError) -> Self {
        Self::Core {
            stage: Stage::Metrics,
            source,
        }
    }

    /// Failure while rendering a report or chart.
    pub fn render(source: SymbenchError) -> Self {
        Self::Core {
            stage: Stage::Render,
            source,
        }
    }

    /// Failure while preparing `path`.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Stage the error belongs to, when known.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Core { stage, .. } => Some(*stage),
            Self::Preprocess(_) => Some(Stage::Preprocess),
            Self::Io { .. } => None,
        }
    }
}
