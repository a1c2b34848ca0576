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

//! Property-based tests for labels, log parsing and accuracy metrics.

use proptest::prelude::*;
use symbench_core::{
    compute_metrics, config_label, normalize_speedups, parse_performance_log,
    parse_performance_log_with_rules, KeywordCounts, Method, PerformanceRecord,
};
use symbench_test::perf_line;

fn method_strategy() -> impl Strategy<Value = Method> {
    prop_oneof![
        Just(Method::Serial),
        Just(Method::OpenMp),
        Just(Method::Mpi),
        Just(Method::Hybrid),
    ]
}

fn counts_strategy() -> impl Strategy<Value = KeywordCounts> {
    prop::collection::vec(("[a-z_]{1,12}", 0u64..10_000), 1..30)
        .prop_map(|pairs| pairs.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: Labels depend only on their inputs.
    #[test]
    fn prop_label_is_deterministic(method in method_strategy(), p in 0u64..512, t in 0u64..512) {
        prop_assert_eq!(config_label(method, p, t), config_label(method, p, t));
    }

    /// Property: Hybrid labels are `PxT (MPIxOMP)`.
    #[test]
    fn prop_hybrid_label_shape(p in 1u64..512, t in 1u64..512) {
        prop_assert_eq!(config_label(Method::Hybrid, p, t), format!("{}x{} (MPIxOMP)", p, t));
    }

    /// Property: Every well-formed block yields exactly one record with its fields.
    #[test]
    fn prop_parser_fidelity(
        runs in prop::collection::vec(
            (method_strategy(), 1u32..10_000_000, 1u64..256, 1u64..256),
            0..20,
        )
    ) {
        let log: String = runs
            .iter()
            .map(|(m, micros, p, t)| perf_line(m.as_str(), *micros as f64 / 1e6, *p, *t))
            .collect();

        let records = parse_performance_log_with_rules(&log, &[]).unwrap();
        prop_assert_eq!(records.len(), runs.len());
        for (record, (method, micros, p, t)) in records.iter().zip(&runs) {
            prop_assert_eq!(record.method, *method);
            prop_assert_eq!(record.process_count, *p);
            prop_assert_eq!(record.thread_count, *t);
            prop_assert!((record.time_seconds - *micros as f64 / 1e6).abs() < 1e-9);
            prop_assert_eq!(&record.config_label, &config_label(*method, *p, *t));
        }
    }

    /// Property: Default rules only drop the Hybrid 8x2 configuration.
    #[test]
    fn prop_default_exclusion_is_narrow(p in 1u64..64, t in 1u64..64) {
        let log = perf_line("Hybrid", 1.0, p, t);
        let records = parse_performance_log(&log).unwrap();
        if p == 8 && t == 2 {
            prop_assert!(records.is_empty());
        } else {
            prop_assert_eq!(records.len(), 1);
        }
    }

    /// Property: A count set compared with itself is perfect.
    #[test]
    fn prop_self_comparison_is_exact(counts in counts_strategy()) {
        let m = compute_metrics(Method::OpenMp, &counts, &counts).unwrap();
        prop_assert_eq!(m.percent_exact_match, 100.0);
        prop_assert_eq!(m.mean_absolute_error, 0.0);
        prop_assert_eq!(m.root_mean_square_error, 0.0);
    }

    /// Property: RMSE never falls below MAE and match stays in [0, 100].
    #[test]
    fn prop_metric_bounds(baseline in counts_strategy(), candidate in counts_strategy()) {
        let m = compute_metrics(Method::Mpi, &baseline, &candidate).unwrap();
        prop_assert!((0.0..=100.0).contains(&m.percent_exact_match));
        prop_assert!(m.root_mean_square_error + 1e-9 >= m.mean_absolute_error);
    }

    /// Property: The fastest Serial run has speedup 1.0; slower ones stay at or below it.
    #[test]
    fn prop_fastest_serial_is_unit(
        serial_times in prop::collection::vec(1u32..1_000_000, 1..10),
        other_times in prop::collection::vec(1u32..1_000_000, 0..10),
    ) {
        let mut records: Vec<PerformanceRecord> = serial_times
            .iter()
            .map(|t| PerformanceRecord::new(Method::Serial, *t as f64 / 1e3, 1, 1))
            .chain(
                other_times
                    .iter()
                    .map(|t| PerformanceRecord::new(Method::OpenMp, *t as f64 / 1e3, 1, 4)),
            )
            .collect();

        let baseline = normalize_speedups(&mut records);
        let fastest = *serial_times.iter().min().unwrap() as f64 / 1e3;
        prop_assert_eq!(baseline, fastest);

        for record in records.iter().filter(|r| r.method == Method::Serial) {
            prop_assert!(record.speedup <= 1.0);
            if record.time_seconds == fastest {
                prop_assert_eq!(record.speedup, 1.0);
            }
        }
    }
}
