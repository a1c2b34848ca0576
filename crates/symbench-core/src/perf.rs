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

//! Timing log parsing and speedup normalization.
//!
//! Each counting implementation appends a block like
//!
//! ```text
//! OpenMP version time: 2.500000 seconds	 No. of Processors: 1	 No. of Threads: 4
//! ```
//!
//! to a shared log. The three phrases may be separated by any whitespace,
//! including newlines. Text that does not form a complete block is skipped.

use crate::error::{Result, SymbenchError};
use crate::method::{config_label, Method};
use crate::metrics::speedup_ratio;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::{debug, warn};

static PERF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(Serial|OpenMP|MPI|Hybrid) version time: ([0-9.]+) seconds\s+No\. of Process(?:ors|es): (\d+)\s+No\. of Threads: (\d+)",
    )
    .expect("valid performance log pattern")
});

/// Configuration prefix of the Hybrid run that is excluded by default.
pub const EXCLUDED_HYBRID_CONFIG: &str = "8x2 (MPIxOMP)";

/// One timed run extracted from the performance log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRecord {
    /// Execution strategy.
    pub method: Method,
    /// Human-readable resource configuration.
    pub config_label: String,
    /// Elapsed wall time in seconds.
    pub time_seconds: f64,
    /// Number of processes.
    pub process_count: u64,
    /// Number of threads.
    pub thread_count: u64,
    /// Speedup against the fastest serial run; `0.0` until normalized.
    pub speedup: f64,
}

impl PerformanceRecord {
    /// Create a record with its label derived from the counts.
    pub fn new(method: Method, time_seconds: f64, process_count: u64, thread_count: u64) -> Self {
        Self {
            method,
            config_label: config_label(method, process_count, thread_count),
            time_seconds,
            process_count,
            thread_count,
            speedup: 0.0,
        }
    }

    /// Chart/axis label, e.g. `OpenMP (4 threads)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.method, self.config_label)
    }
}

/// A configuration signature whose records are dropped after parsing.
///
/// A record is excluded when its method equals `method` and its label starts
/// with `label_prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    /// Method the rule applies to.
    pub method: Method,
    /// Configuration label prefix.
    pub label_prefix: String,
}

impl ExclusionRule {
    /// Create a rule.
    pub fn new(method: Method, label_prefix: impl Into<String>) -> Self {
        Self {
            method,
            label_prefix: label_prefix.into(),
        }
    }

    /// The curated default: drop the Hybrid 8x2 run.
    pub fn defaults() -> Vec<ExclusionRule> {
        vec![ExclusionRule::new(Method::Hybrid, EXCLUDED_HYBRID_CONFIG)]
    }

    /// Whether this rule excludes `record`.
    pub fn matches(&self, record: &PerformanceRecord) -> bool {
        record.method == self.method && record.config_label.starts_with(&self.label_prefix)
    }
}

/// Running 1-based line number over increasing byte offsets of one text.
struct LineTracker<'t> {
    text: &'t str,
    offset: usize,
    line: usize,
}

impl<'t> LineTracker<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            text,
            offset: 0,
            line: 1,
        }
    }

    /// Line containing `offset`. Offsets must not decrease between calls.
    fn line_at(&mut self, offset: usize) -> usize {
        if offset > self.offset {
            self.line += self.text[self.offset..offset].matches('\n').count();
            self.offset = offset;
        }
        self.line
    }
}

fn record_from_captures(caps: &Captures<'_>, line: usize) -> Result<PerformanceRecord> {
    let field = |idx: usize| caps.get(idx).map_or("", |m| m.as_str());

    let method = Method::from_token(field(1)).ok_or_else(|| {
        SymbenchError::parse(
            SymbenchError::INLINE_ORIGIN,
            line,
            format!("unknown method '{}'", field(1)),
        )
    })?;

    let time_seconds = field(2).parse::<f64>().map_err(|e| {
        SymbenchError::parse(
            SymbenchError::INLINE_ORIGIN,
            line,
            format!("invalid time '{}': {}", field(2), e),
        )
    })?;

    let parse_count = |idx: usize, what: &str| {
        field(idx).parse::<u64>().map_err(|e| {
            SymbenchError::parse(
                SymbenchError::INLINE_ORIGIN,
                line,
                format!("invalid {} '{}': {}", what, field(idx), e),
            )
        })
    };
    let process_count = parse_count(3, "process count")?;
    let thread_count = parse_count(4, "thread count")?;

    Ok(PerformanceRecord::new(
        method,
        time_seconds,
        process_count,
        thread_count,
    ))
}

/// Parse a performance log with the default exclusion rules.
///
/// ```
/// use symbench_core::{parse_performance_log, Method};
///
/// let log = "OpenMP version time: 2.500000 seconds\nNo. of Processes: 1\nNo. of Threads: 4";
/// let records = parse_performance_log(log).unwrap();
/// assert_eq!(records[0].method, Method::OpenMp);
/// assert_eq!(records[0].time_seconds, 2.5);
/// assert_eq!(records[0].config_label, "4 threads");
/// ```
pub fn parse_performance_log(text: &str) -> Result<Vec<PerformanceRecord>> {
    parse_performance_log_with_rules(text, &ExclusionRule::defaults())
}

/// Parse a performance log, dropping records matched by any of `rules`.
///
/// Records are returned in encounter order. A log without any complete block
/// yields an empty vector.
///
/// # Errors
///
/// Returns [`SymbenchError::Parse`] when a matched block carries a time or
/// count that does not fit its numeric type (e.g. `1.2.3 seconds`).
pub fn parse_performance_log_with_rules(
    text: &str,
    rules: &[ExclusionRule],
) -> Result<Vec<PerformanceRecord>> {
    let mut records = Vec::new();
    let mut excluded = 0usize;
    let mut lines = LineTracker::new(text);

    for caps in PERF_PATTERN.captures_iter(text) {
        let start = caps.get(0).map_or(0, |m| m.start());
        let record = record_from_captures(&caps, lines.line_at(start))?;
        if rules.iter().any(|rule| rule.matches(&record)) {
            debug!(
                method = %record.method,
                config = %record.config_label,
                "excluding performance record"
            );
            excluded += 1;
            continue;
        }
        records.push(record);
    }

    debug!(records = records.len(), excluded, "parsed performance log");
    Ok(records)
}

/// Fill in `speedup` for every record and return the baseline time used.
///
/// The baseline is the fastest Serial time. Without any Serial record the
/// baseline falls back to `1.0`, which makes each speedup `1 / time`.
pub fn normalize_speedups(records: &mut [PerformanceRecord]) -> f64 {
    let baseline = records
        .iter()
        .filter(|r| r.method == Method::Serial)
        .map(|r| r.time_seconds)
        .fold(None, |min: Option<f64>, t| {
            Some(min.map_or(t, |m| m.min(t)))
        });

    let baseline = match baseline {
        Some(time) => time,
        None => {
            warn!("no Serial record in performance log, using a baseline of 1.0 seconds");
            1.0
        }
    };

    for record in records.iter_mut() {
        record.speedup = speedup_ratio(baseline, record.time_seconds);
    }

    baseline
}
