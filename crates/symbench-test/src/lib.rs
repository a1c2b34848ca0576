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

//! Shared test fixtures for SymBench crates.
//!
//! The fixtures mirror what the four counting implementations actually write:
//! a shared timing log with one tab-separated block per run, and one
//! `keyword: count` dump per method.
//!
//! # Quick Start
//!
//! ```rust
//! use symbench_test::{fixtures, OutputsDir};
//!
//! // Raw text
//! assert!(fixtures::PERFORMANCE_LOG.contains("Serial version time"));
//!
//! // A temporary directory laid out like a real run
//! let dir = OutputsDir::create().unwrap();
//! assert!(dir.path().join("outputs/result_serial.txt").exists());
//! ```

pub mod fixtures;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary working directory containing `outputs/` with every fixture.
pub struct OutputsDir {
    dir: TempDir,
}

impl OutputsDir {
    /// Create the directory and write all fixture files into `outputs/`.
    pub fn create() -> io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let outputs = dir.path().join("outputs");
        fs::create_dir_all(&outputs)?;

        fs::write(outputs.join("performance.txt"), fixtures::PERFORMANCE_LOG)?;
        for (stem, content) in fixtures::result_files() {
            fs::write(outputs.join(format!("result_{}.txt", stem)), content)?;
        }

        Ok(Self { dir })
    }

    /// Root of the working directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file under `outputs/`.
    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join("outputs").join(name)
    }

    /// Overwrite (or create) a file under `outputs/`.
    pub fn write_output(&self, name: &str, content: &str) -> io::Result<PathBuf> {
        let path = self.output(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Remove a file under `outputs/`.
    pub fn remove_output(&self, name: &str) -> io::Result<()> {
        fs::remove_file(self.output(name))
    }
}

/// Build a one-block performance log line the way the C programs print it.
pub fn perf_line(method: &str, seconds: f64, processes: u64, threads: u64) -> String {
    format!(
        "{} version time: {:.6} seconds\t No. of Processors: {}\t No. of Threads: {}\n",
        method, seconds, processes, threads
    )
}

/// Build a keyword count dump from pairs.
pub fn counts_text(pairs: &[(&str, u64)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}: {}\n", k, v))
        .collect()
}
