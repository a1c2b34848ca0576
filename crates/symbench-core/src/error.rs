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

//! Error types for log parsing and metrics computation.
//!
//! A run either reads and parses every input completely or aborts with one of
//! these variants. Lines that do not match an expected pattern are skipped and
//! never surface here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for SymBench core operations.
pub type Result<T> = std::result::Result<T, SymbenchError>;

/// Errors produced by the SymBench core.
///
/// # Examples
///
/// ```
/// use symbench_core::SymbenchError;
///
/// let err = SymbenchError::parse("result_mpi.txt", 3, "invalid count 'x'");
/// assert_eq!(
///     err.to_string(),
///     "Parse error in 'result_mpi.txt' at line 3: invalid count 'x'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymbenchError {
    /// An input file is missing or unreadable.
    #[error("Cannot access '{path}': {message}")]
    FileAccess {
        /// The file path that caused the error
        path: PathBuf,
        /// The underlying I/O error message
        message: String,
    },

    /// An input file exceeds the configured size limit.
    ///
    /// Raised before any bytes are read.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
    },

    /// A numeric field could not be parsed.
    #[error("Parse error in '{origin}' at line {line}: {message}")]
    Parse {
        /// Where the text came from (a file path or `<input>`)
        origin: String,
        /// Line number (1-based)
        line: usize,
        /// Human-readable description
        message: String,
    },

    /// A precondition on the inputs of a computation was violated.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serializing a report failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A chart sink failed to draw a figure.
    #[error("Chart '{chart}' could not be rendered: {message}")]
    Render {
        /// Slug of the chart being drawn
        chart: String,
        /// Backend failure description
        message: String,
    },
}

impl SymbenchError {
    /// Origin used for text that was not read from a file.
    pub const INLINE_ORIGIN: &'static str = "<input>";

    /// Create a file-access error with path context.
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a parse error.
    pub fn parse(origin: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a render error for the chart with `slug`.
    pub fn render(slug: impl Into<String>, message: impl ToString) -> Self {
        Self::Render {
            chart: slug.into(),
            message: message.to_string(),
        }
    }

    /// Re-attribute a parse error to a concrete origin such as a file path.
    ///
    /// Other variants are returned unchanged.
    pub fn with_origin(self, new_origin: impl Into<String>) -> Self {
        match self {
            Self::Parse { line, message, .. } => Self::Parse {
                origin: new_origin.into(),
                line,
                message,
            },
            other => other,
        }
    }

    /// Returns `true` for the file-access family (missing, unreadable, too large).
    pub fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. } | Self::FileTooLarge { .. })
    }
}

impl From<serde_json::Error> for SymbenchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
