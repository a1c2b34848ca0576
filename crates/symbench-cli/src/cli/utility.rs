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

//! Utility commands for SymBench CLI.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;
use symbench_csv::{DEFAULT_CORPUS_PATH, DEFAULT_DATASET_PATH};

/// Utility commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Convert the symptom dataset CSV into the counting corpus
    ///
    /// Each row becomes `disease symptom_1 ... symptom_5`, lower-cased, one
    /// report per line.
    Preprocess {
        /// Symptom dataset
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DATASET_PATH)]
        input: PathBuf,

        /// Corpus to write (created or truncated)
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CORPUS_PATH)]
        output: PathBuf,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::Preprocess { input, output } => commands::preprocess(&input, &output),
        }
    }
}
