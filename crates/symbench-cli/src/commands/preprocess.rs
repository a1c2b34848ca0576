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

//! Preprocess command - dataset CSV to counting corpus

use super::print_output;
use crate::error::CliError;
use std::fs;
use std::path::Path;
use symbench_csv::preprocess_file;

/// Convert `input` into the corpus at `output`, creating its directory.
pub fn preprocess(input: &Path, output: &Path) -> Result<(), CliError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))?;
    }

    let rows = preprocess_file(input, output)?;
    print_output(&format!("Converted {} rows to {}", rows, output.display()))
}
