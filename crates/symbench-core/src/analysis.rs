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

//! Compute stage of the pipeline.
//!
//! Takes already-parsed inputs and derives speedups and accuracy metrics.
//! Nothing here touches the filesystem.

use crate::counts::KeywordCounts;
use crate::error::Result;
use crate::method::Method;
use crate::metrics::{compute_metrics, AccuracyMetrics, KeySetDivergence};
use crate::perf::{normalize_speedups, PerformanceRecord};
use crate::report::DivergenceNote;
use tracing::warn;

/// Performance records with speedups filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceAnalysis {
    /// Records in log order.
    pub records: Vec<PerformanceRecord>,
    /// Time every speedup is relative to.
    pub baseline_seconds: f64,
}

/// Accuracy metrics of each accelerated method plus key-set notes.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyAnalysis {
    /// One entry per candidate, in input order.
    pub metrics: Vec<AccuracyMetrics>,
    /// One entry per candidate; empty divergences included.
    pub notes: Vec<DivergenceNote>,
}

impl AccuracyAnalysis {
    /// Whether any candidate's keyword set differs from the serial one.
    pub fn has_divergence(&self) -> bool {
        self.notes.iter().any(|n| !n.divergence.is_empty())
    }
}

/// Normalize speedups over the complete record set.
pub fn analyze_performance(mut records: Vec<PerformanceRecord>) -> PerformanceAnalysis {
    let baseline_seconds = normalize_speedups(&mut records);
    PerformanceAnalysis {
        records,
        baseline_seconds,
    }
}

/// Compare each candidate against the serial counts.
///
/// Key-set differences are logged and recorded but never change the metrics.
///
/// # Errors
///
/// Fails with `InvalidInput` when `serial` is empty.
pub fn analyze_accuracy(
    serial: &KeywordCounts,
    candidates: &[(Method, &KeywordCounts)],
) -> Result<AccuracyAnalysis> {
    let mut metrics = Vec::with_capacity(candidates.len());
    let mut notes = Vec::with_capacity(candidates.len());

    for (method, counts) in candidates {
        let divergence = KeySetDivergence::between(serial, counts);
        if !divergence.is_empty() {
            warn!(
                method = %method,
                missing = divergence.missing.len(),
                extra = divergence.extra.len(),
                "keyword set differs from the serial reference"
            );
        }

        metrics.push(compute_metrics(*method, serial, counts)?);
        notes.push(DivergenceNote {
            method: *method,
            divergence,
        });
    }

    Ok(AccuracyAnalysis { metrics, notes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SymbenchError;

    #[test]
    fn test_analyze_performance_sets_baseline() {
        let analysis = analyze_performance(vec![
            PerformanceRecord::new(Method::Serial, 3.0, 1, 1),
            PerformanceRecord::new(Method::OpenMp, 1.5, 1, 2),
        ]);
        assert_eq!(analysis.baseline_seconds, 3.0);
        assert_eq!(analysis.records[1].speedup, 2.0);
    }

    #[test]
    fn test_analyze_accuracy_in_candidate_order() {
        let serial: KeywordCounts = [("a", 1), ("b", 2)].into_iter().collect();
        let omp = serial.clone();
        let mpi: KeywordCounts = [("a", 1)].into_iter().collect();

        let analysis =
            analyze_accuracy(&serial, &[(Method::OpenMp, &omp), (Method::Mpi, &mpi)]).unwrap();
        assert_eq!(analysis.metrics[0].method, Method::OpenMp);
        assert_eq!(analysis.metrics[0].percent_exact_match, 100.0);
        assert_eq!(analysis.metrics[1].method, Method::Mpi);
        assert_eq!(analysis.metrics[1].mean_absolute_error, 1.0);
        assert!(analysis.has_divergence());
        assert_eq!(analysis.notes[1].divergence.missing, vec!["b".to_string()]);
    }

    #[test]
    fn test_analyze_accuracy_empty_serial() {
        let empty = KeywordCounts::new();
        let err = analyze_accuracy(&empty, &[(Method::Hybrid, &empty)]).unwrap_err();
        assert!(matches!(err, SymbenchError::InvalidInput(_)));
    }
}
