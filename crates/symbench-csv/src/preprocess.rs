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

//! CSV to corpus conversion.

use crate::error::{CsvError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Dataset read when no input path is given.
pub const DEFAULT_DATASET_PATH: &str = "data/Original_Dataset.csv";

/// Corpus written when no output path is given.
pub const DEFAULT_CORPUS_PATH: &str = "data/medical_reports.txt";

/// Columns every dataset must carry, in output order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Disease",
    "Symptom_1",
    "Symptom_2",
    "Symptom_3",
    "Symptom_4",
    "Symptom_5",
];

fn column_indices(headers: &StringRecord) -> Result<Vec<usize>> {
    REQUIRED_COLUMNS
        .iter()
        .map(|name| {
            headers
                .iter()
                .position(|h| h == *name)
                .ok_or_else(|| CsvError::MissingColumn((*name).to_string()))
        })
        .collect()
}

/// Convert a headed symptom CSV into one lower-cased line per row.
///
/// Fields are joined by single spaces without trimming them individually;
/// only the finished line loses its outer whitespace. Short rows contribute
/// empty fields. Returns the number of lines written.
///
/// # Errors
///
/// - [`CsvError::MissingColumn`] if a required header is absent
/// - [`CsvError::CsvLib`] on malformed CSV
/// - [`CsvError::Io`] if writing fails
pub fn preprocess_reader<R: Read, W: Write>(reader: R, mut writer: W) -> Result<usize> {
    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let indices = column_indices(csv.headers()?)?;

    let mut rows = 0usize;
    let mut record = StringRecord::new();
    while csv.read_record(&mut record)? {
        let line = indices
            .iter()
            .map(|&i| record.get(i).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        writeln!(writer, "{}", line.trim())?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// Convert the dataset at `input` and write the corpus to `output`.
///
/// The corpus is built in memory first, so a dataset that fails to convert
/// leaves an existing `output` untouched. Otherwise the file is created or
/// truncated.
pub fn preprocess_file(input: &Path, output: &Path) -> Result<usize> {
    let source = File::open(input).map_err(|e| CsvError::file_access(input, e))?;

    let mut corpus = Vec::new();
    let rows = preprocess_reader(source, &mut corpus)?;
    fs::write(output, corpus).map_err(|e| CsvError::file_access(output, e))?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rows,
        "converted dataset to corpus"
    );
    Ok(rows)
}
