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

//! Execution methods and run-configuration labels.

use crate::error::{Result, SymbenchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed label of the serial run, which is single-core by definition.
pub const SERIAL_LABEL: &str = "1 core, 1 thread";

/// The execution strategy a counting run used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Method {
    /// Single-threaded baseline.
    Serial,
    /// Shared-memory threads.
    #[serde(rename = "OpenMP")]
    OpenMp,
    /// Distributed processes.
    #[serde(rename = "MPI")]
    Mpi,
    /// MPI processes each running OpenMP threads.
    Hybrid,
}

impl Method {
    /// All methods in canonical report order.
    pub const ALL: [Method; 4] = [Method::Serial, Method::OpenMp, Method::Mpi, Method::Hybrid];

    /// The accelerated variants compared against the serial ground truth.
    pub const ACCELERATED: [Method; 3] = [Method::OpenMp, Method::Mpi, Method::Hybrid];

    /// Display name as it appears in logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Serial => "Serial",
            Method::OpenMp => "OpenMP",
            Method::Mpi => "MPI",
            Method::Hybrid => "Hybrid",
        }
    }

    /// Resolve a method token, ignoring ASCII case.
    ///
    /// ```
    /// use symbench_core::Method;
    ///
    /// assert_eq!(Method::from_token("openmp"), Some(Method::OpenMp));
    /// assert_eq!(Method::from_token("CUDA"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Method> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(token.trim()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Method {
    type Err = SymbenchError;

    fn from_str(s: &str) -> Result<Self> {
        Method::from_token(s)
            .ok_or_else(|| SymbenchError::invalid_input(format!("unknown method '{}'", s)))
    }
}

/// Build the human-readable configuration label of a run.
///
/// Serial ignores both counts. OpenMP reports threads, MPI reports processes
/// and Hybrid reports `processes x threads`.
///
/// ```
/// use symbench_core::{config_label, Method};
///
/// assert_eq!(config_label(Method::Serial, 4, 4), "1 core, 1 thread");
/// assert_eq!(config_label(Method::OpenMp, 1, 8), "8 threads");
/// assert_eq!(config_label(Method::Mpi, 4, 1), "4 processes");
/// assert_eq!(config_label(Method::Hybrid, 4, 2), "4x2 (MPIxOMP)");
/// ```
pub fn config_label(method: Method, process_count: u64, thread_count: u64) -> String {
    match method {
        Method::Serial => SERIAL_LABEL.to_string(),
        Method::OpenMp => format!("{} threads", thread_count),
        Method::Mpi => format!("{} processes", process_count),
        Method::Hybrid => format!("{}x{} (MPIxOMP)", process_count, thread_count),
    }
}

/// Same as [`config_label`] but starting from a raw method token.
///
/// Unknown tokens yield an empty label rather than an error.
pub fn config_label_for_token(token: &str, process_count: u64, thread_count: u64) -> String {
    Method::from_token(token)
        .map(|method| config_label(method, process_count, thread_count))
        .unwrap_or_default()
}
