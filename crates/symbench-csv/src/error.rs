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

//! Error types for dataset preprocessing.

use std::path::PathBuf;
use thiserror::Error;

/// Preprocessing error types.
///
/// # Examples
///
/// ```
/// use symbench_csv::CsvError;
///
/// let err = CsvError::MissingColumn("Symptom_3".to_string());
/// assert_eq!(err.to_string(), "Missing required column: Symptom_3");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The input or output file could not be opened.
    #[error("Cannot access '{path}': {source}")]
    FileAccess {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// I/O error while writing the corpus.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

/// Result type for preprocessing operations.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Build a [`CsvError::FileAccess`] for `path`.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CsvError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
