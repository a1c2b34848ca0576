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

//! Speedup and accuracy metrics.
//!
//! Accuracy compares a candidate's keyword counts against the serial ground
//! truth over the baseline's keyword set, in the baseline's order:
//!
//! - **exact match**: a keyword matches only if the candidate has it and the
//!   counts are equal. A missing keyword never matches.
//! - **MAE / RMSE**: a missing keyword counts as zero.
//!
//! A missing keyword therefore costs one match and adds its full baseline
//! count to the error terms.

use crate::counts::KeywordCounts;
use crate::error::{Result, SymbenchError};
use crate::method::Method;
use serde::Serialize;

/// Accuracy of one accelerated method against the serial counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyMetrics {
    /// Method being evaluated.
    pub method: Method,
    /// Share of keywords with identical counts, in `[0, 100]`.
    pub percent_exact_match: f64,
    /// Mean absolute count deviation.
    pub mean_absolute_error: f64,
    /// Root-mean-square count deviation.
    pub root_mean_square_error: f64,
}

/// Ratio of the baseline time to `time_seconds`.
///
/// Non-positive times yield `0.0`.
pub fn speedup_ratio(baseline_seconds: f64, time_seconds: f64) -> f64 {
    if time_seconds > 0.0 {
        baseline_seconds / time_seconds
    } else {
        0.0
    }
}

fn ensure_non_empty(baseline: &KeywordCounts) -> Result<f64> {
    if baseline.is_empty() {
        return Err(SymbenchError::invalid_input(
            "baseline keyword set is empty",
        ));
    }
    Ok(baseline.len() as f64)
}

/// Signed deviations `baseline[k] - candidate[k]`, zero-filled, in baseline order.
fn deviations<'a>(
    baseline: &'a KeywordCounts,
    candidate: &'a KeywordCounts,
) -> impl Iterator<Item = f64> + 'a {
    baseline
        .iter()
        .map(move |(keyword, expected)| expected as f64 - candidate.get_or_zero(keyword) as f64)
}

/// Percentage of baseline keywords whose candidate count is present and equal.
pub fn percent_exact_match(baseline: &KeywordCounts, candidate: &KeywordCounts) -> Result<f64> {
    let n = ensure_non_empty(baseline)?;
    let matches = baseline
        .iter()
        .filter(|(keyword, expected)| candidate.get(keyword) == Some(*expected))
        .count();
    Ok(100.0 * matches as f64 / n)
}

/// Mean absolute error with missing candidate keywords counted as zero.
pub fn mean_absolute_error(baseline: &KeywordCounts, candidate: &KeywordCounts) -> Result<f64> {
    let n = ensure_non_empty(baseline)?;
    let total: f64 = deviations(baseline, candidate).map(f64::abs).sum();
    Ok(total / n)
}

/// Root-mean-square error with missing candidate keywords counted as zero.
pub fn root_mean_square_error(baseline: &KeywordCounts, candidate: &KeywordCounts) -> Result<f64> {
    let n = ensure_non_empty(baseline)?;
    let total: f64 = deviations(baseline, candidate).map(|d| d * d).sum();
    Ok((total / n).sqrt())
}

/// Compute every accuracy metric of `candidate` against `baseline`.
///
/// # Errors
///
/// Returns [`SymbenchError::InvalidInput`] when `baseline` is empty.
///
/// # Examples
///
/// ```
/// use symbench_core::{compute_metrics, KeywordCounts, Method};
///
/// let serial: KeywordCounts = [("fever", 10), ("cough", 5)].into_iter().collect();
/// let mpi: KeywordCounts = [("fever", 10), ("cough", 3)].into_iter().collect();
///
/// let m = compute_metrics(Method::Mpi, &serial, &mpi).unwrap();
/// assert_eq!(m.percent_exact_match, 50.0);
/// assert_eq!(m.mean_absolute_error, 1.0);
/// assert!((m.root_mean_square_error - 2f64.sqrt()).abs() < 1e-12);
/// ```
pub fn compute_metrics(
    method: Method,
    baseline: &KeywordCounts,
    candidate: &KeywordCounts,
) -> Result<AccuracyMetrics> {
    Ok(AccuracyMetrics {
        method,
        percent_exact_match: percent_exact_match(baseline, candidate)?,
        mean_absolute_error: mean_absolute_error(baseline, candidate)?,
        root_mean_square_error: root_mean_square_error(baseline, candidate)?,
    })
}

/// Key-set difference between a candidate and the reference keyword set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeySetDivergence {
    /// Reference keywords the candidate lacks, in reference order.
    pub missing: Vec<String>,
    /// Candidate keywords outside the reference set, in candidate order.
    pub extra: Vec<String>,
}

impl KeySetDivergence {
    /// Compare the keyword sets of `baseline` and `candidate`.
    pub fn between(baseline: &KeywordCounts, candidate: &KeywordCounts) -> Self {
        let missing = baseline
            .keywords()
            .filter(|k| !candidate.contains(k))
            .map(str::to_string)
            .collect();
        let extra = candidate
            .keywords()
            .filter(|k| !baseline.contains(k))
            .map(str::to_string)
            .collect();
        Self { missing, extra }
    }

    /// `true` when both key sets are identical.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}
