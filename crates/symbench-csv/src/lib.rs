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

//! Symptom dataset preprocessing.
//!
//! The keyword counters read one plain-text report per line. This crate turns
//! the original symptom CSV into that corpus: each row becomes the disease
//! name followed by its five symptom fields, lower-cased.
//!
//! # Examples
//!
//! ```
//! use symbench_csv::preprocess_reader;
//!
//! let csv = "Disease,Symptom_1,Symptom_2,Symptom_3,Symptom_4,Symptom_5\n\
//!            Allergy,Shivering,chills,,,\n";
//! let mut out = Vec::new();
//! let rows = preprocess_reader(csv.as_bytes(), &mut out).unwrap();
//!
//! assert_eq!(rows, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "allergy shivering chills\n");
//! ```

mod error;
mod preprocess;

pub use error::{CsvError, Result};
pub use preprocess::{
    preprocess_file, preprocess_reader, DEFAULT_CORPUS_PATH, DEFAULT_DATASET_PATH,
    REQUIRED_COLUMNS,
};
