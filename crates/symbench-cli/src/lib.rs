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

//! SymBench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Reports
//!
//! - **performance**: execution time and speedup of every recorded run
//! - **accuracy**: exact-match %, MAE and RMSE of each accelerated method
//!   against the serial counts
//! - **report**: both of the above, in that order
//!
//! Each report accepts `--format text|markdown|json` and an optional
//! `--charts <DIR>` that writes one SVG per figure.
//!
//! ## Utilities
//!
//! - **preprocess**: turn the symptom dataset CSV into the text corpus the
//!   counters read
//!
//! # Examples
//!
//! ```no_run
//! use symbench_cli::commands::performance;
//! use symbench_core::{AnalysisConfig, ReportFormat};
//!
//! # fn main() -> Result<(), symbench_cli::error::CliError> {
//! performance(&AnalysisConfig::default(), ReportFormat::Text, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Commands return [`error::CliError`], which names the pipeline stage that
//! failed. Input files above `SYMBENCH_MAX_FILE_SIZE` bytes are rejected
//! before being read.

pub mod charts;
pub mod cli;
pub mod commands;
pub mod error;
