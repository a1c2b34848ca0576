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

//! File-level preprocessing tests.

use std::fs;
use symbench_csv::{preprocess_file, preprocess_reader, CsvError};
use symbench_test::fixtures::{SYMPTOM_CSV, SYMPTOM_TEXT};

#[test]
fn test_symptom_fixture() {
    let mut out = Vec::new();
    let rows = preprocess_reader(SYMPTOM_CSV.as_bytes(), &mut out).unwrap();
    assert_eq!(rows, 3);
    assert_eq!(String::from_utf8(out).unwrap(), SYMPTOM_TEXT);
}

#[test]
fn test_preprocess_file_writes_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Original_Dataset.csv");
    let output = dir.path().join("medical_reports.txt");
    fs::write(&input, SYMPTOM_CSV).unwrap();

    let rows = preprocess_file(&input, &output).unwrap();
    assert_eq!(rows, 3);
    assert_eq!(fs::read_to_string(&output).unwrap(), SYMPTOM_TEXT);
}

#[test]
fn test_preprocess_file_truncates_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.txt");
    fs::write(&input, SYMPTOM_CSV).unwrap();
    fs::write(&output, "stale content that is much longer than anything else\n".repeat(20))
        .unwrap();

    preprocess_file(&input, &output).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), SYMPTOM_TEXT);
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = preprocess_file(&dir.path().join("absent.csv"), &dir.path().join("out.txt"))
        .unwrap_err();
    assert!(matches!(err, CsvError::FileAccess { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn test_failed_conversion_keeps_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    let output = dir.path().join("out.txt");
    fs::write(&input, "Disease,Symptom_1\nFlu,fever\n").unwrap();
    fs::write(&output, "previous corpus\n").unwrap();

    let err = preprocess_file(&input, &output).unwrap_err();
    assert!(matches!(err, CsvError::MissingColumn(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous corpus\n");
}
