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

//! Keyword count dumps.
//!
//! Each counting implementation writes one `keyword: count` pair per line.
//! The serial dump defines the reference keyword universe; the others are
//! expected to share it.

use crate::error::{Result, SymbenchError};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Ordered mapping from keyword to count, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordCounts {
    counts: IndexMap<String, u64>,
}

impl KeywordCounts {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a keyword.
    ///
    /// Overwriting keeps the keyword at its original position.
    pub fn insert(&mut self, keyword: impl Into<String>, count: u64) -> Option<u64> {
        self.counts.insert(keyword.into(), count)
    }

    /// Count for `keyword`, or `None` when absent.
    pub fn get(&self, keyword: &str) -> Option<u64> {
        self.counts.get(keyword).copied()
    }

    /// Count for `keyword`, treating absence as zero.
    pub fn get_or_zero(&self, keyword: &str) -> u64 {
        self.get(keyword).unwrap_or(0)
    }

    /// Whether `keyword` is present.
    pub fn contains(&self, keyword: &str) -> bool {
        self.counts.contains_key(keyword)
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no keywords are present.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Keywords in insertion order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(keyword, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for KeywordCounts {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut counts = KeywordCounts::new();
        for (keyword, count) in iter {
            counts.insert(keyword, count);
        }
        counts
    }
}

/// Parse a keyword count dump.
///
/// The first colon on a line separates keyword from count; both sides are
/// trimmed. Lines without a colon are skipped. A count that is not a
/// non-negative integer fails the whole parse.
///
/// ```
/// use symbench_core::parse_result_counts;
///
/// let counts = parse_result_counts("fever: 10\ncough: 5\n").unwrap();
/// assert_eq!(counts.get("fever"), Some(10));
/// assert_eq!(counts.keywords().collect::<Vec<_>>(), ["fever", "cough"]);
/// ```
pub fn parse_result_counts(text: &str) -> Result<KeywordCounts> {
    let mut counts = KeywordCounts::new();
    let mut skipped = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let Some((keyword, value)) = line.split_once(':') else {
            skipped += 1;
            continue;
        };

        let value = value.trim();
        let count = value.parse::<u64>().map_err(|e| {
            SymbenchError::parse(
                SymbenchError::INLINE_ORIGIN,
                idx + 1,
                format!("invalid count '{}' for keyword '{}': {}", value, keyword.trim(), e),
            )
        })?;

        counts.insert(keyword.trim(), count);
    }

    debug!(
        keywords = counts.len(),
        skipped, "parsed keyword count dump"
    );
    Ok(counts)
}
