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

//! End-to-end tests of the parse, compute and render stages over a
//! realistic benchmark session.

use symbench_core::{
    analyze_accuracy, analyze_performance, load_configured_counts, load_configured_performance,
    parse_performance_log, parse_result_counts, render_accuracy, render_performance,
    AnalysisConfig, Method, ReportFormat, SymbenchError,
};
use symbench_test::{fixtures, OutputsDir};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn config_for(dir: &OutputsDir) -> AnalysisConfig {
    let mut config =
        AnalysisConfig::default().with_performance_path(dir.output("performance.txt"));
    for method in Method::ALL {
        let name = format!("result_{}.txt", method.as_str().to_lowercase());
        config = config.with_result_path(method, dir.output(&name));
    }
    config
}

#[test]
fn test_performance_session() {
    let analysis = analyze_performance(parse_performance_log(fixtures::PERFORMANCE_LOG).unwrap());

    assert_eq!(analysis.records.len(), fixtures::PERFORMANCE_RECORD_COUNT);
    assert!(close(analysis.baseline_seconds, fixtures::FASTEST_SERIAL_SECONDS));

    let labels: Vec<String> = analysis.records.iter().map(|r| r.display_label()).collect();
    assert_eq!(
        labels,
        vec![
            "Serial (1 core, 1 thread)",
            "Serial (1 core, 1 thread)",
            "OpenMP (4 threads)",
            "OpenMP (8 threads)",
            "MPI (4 processes)",
            "Hybrid (4x2 (MPIxOMP))",
        ]
    );

    let speedups: Vec<f64> = analysis.records.iter().map(|r| r.speedup).collect();
    let expected = [0.4 / 0.48, 1.0, 2.5, 4.0, 2.0, 5.0];
    for (got, want) in speedups.iter().zip(expected) {
        assert!(close(*got, want), "speedup {} != {}", got, want);
    }
}

#[test]
fn test_excluded_hybrid_never_reaches_report() {
    let analysis = analyze_performance(parse_performance_log(fixtures::PERFORMANCE_LOG).unwrap());
    let text = render_performance(&analysis.records, ReportFormat::Text).unwrap();
    assert!(!text.contains("8x2"));
    assert!(text.contains("4x2 (MPIxOMP)"));
}

#[test]
fn test_accuracy_session() {
    let serial = parse_result_counts(fixtures::SERIAL_COUNTS).unwrap();
    let openmp = parse_result_counts(fixtures::OPENMP_COUNTS).unwrap();
    let mpi = parse_result_counts(fixtures::MPI_COUNTS).unwrap();
    let hybrid = parse_result_counts(fixtures::HYBRID_COUNTS).unwrap();

    let analysis = analyze_accuracy(
        &serial,
        &[
            (Method::OpenMp, &openmp),
            (Method::Mpi, &mpi),
            (Method::Hybrid, &hybrid),
        ],
    )
    .unwrap();

    let omp = &analysis.metrics[0];
    assert_eq!(omp.percent_exact_match, 100.0);
    assert_eq!(omp.mean_absolute_error, 0.0);
    assert_eq!(omp.root_mean_square_error, 0.0);

    let mpi = &analysis.metrics[1];
    assert!(close(mpi.percent_exact_match, 80.0));
    assert!(close(mpi.mean_absolute_error, 0.4));
    assert!(close(mpi.root_mean_square_error, 0.8f64.sqrt()));

    let hybrid = &analysis.metrics[2];
    assert!(close(hybrid.percent_exact_match, 60.0));
    assert!(close(hybrid.mean_absolute_error, 2.6));
    assert!(close(hybrid.root_mean_square_error, 29f64.sqrt()));

    assert!(analysis.has_divergence());
    assert_eq!(analysis.notes[2].divergence.missing, vec!["rash".to_string()]);
    assert_eq!(analysis.notes[2].divergence.extra, vec!["nausea".to_string()]);
}

#[test]
fn test_accuracy_report_formats() {
    let serial = parse_result_counts(fixtures::SERIAL_COUNTS).unwrap();
    let hybrid = parse_result_counts(fixtures::HYBRID_COUNTS).unwrap();
    let analysis = analyze_accuracy(&serial, &[(Method::Hybrid, &hybrid)]).unwrap();

    let text = render_accuracy(&analysis.metrics, &analysis.notes, ReportFormat::Text).unwrap();
    assert!(text.contains("| Hybrid   | 60.00      | 2.600000     | 5.385165     |"));
    assert!(text.contains("note: Hybrid is missing 1 keyword(s): rash"));

    let json = render_accuracy(&analysis.metrics, &analysis.notes, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metrics"][0]["method"], "Hybrid");
    assert_eq!(value["divergence"][0]["missing"][0], "rash");

    let md = render_accuracy(&analysis.metrics, &analysis.notes, ReportFormat::Markdown).unwrap();
    assert!(md.contains("| Hybrid |"));
}

#[test]
fn test_configured_loading() {
    let dir = OutputsDir::create().unwrap();
    let config = config_for(&dir);

    let records = load_configured_performance(&config).unwrap();
    assert_eq!(records.len(), fixtures::PERFORMANCE_RECORD_COUNT);

    let serial = load_configured_counts(&config, Method::Serial).unwrap();
    assert_eq!(serial.get("fever"), Some(120));
    assert_eq!(serial.len(), 5);
}

#[test]
fn test_missing_result_file_is_file_access() {
    let dir = OutputsDir::create().unwrap();
    dir.remove_output("result_mpi.txt").unwrap();
    let config = config_for(&dir);

    let err = load_configured_counts(&config, Method::Mpi).unwrap_err();
    assert!(err.is_file_access());
    assert!(err.to_string().contains("result_mpi.txt"));
}

#[test]
fn test_malformed_counts_name_the_file() {
    let dir = OutputsDir::create().unwrap();
    dir.write_output("result_openmp.txt", "fever: 120\ncough: lots\n")
        .unwrap();
    let config = config_for(&dir);

    let err = load_configured_counts(&config, Method::OpenMp).unwrap_err();
    match err {
        SymbenchError::Parse { origin, line, .. } => {
            assert!(origin.ends_with("result_openmp.txt"));
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_oversized_log_rejected() {
    let dir = OutputsDir::create().unwrap();
    let config = config_for(&dir).with_max_file_size(16);

    let err = load_configured_performance(&config).unwrap_err();
    assert!(matches!(err, SymbenchError::FileTooLarge { max: 16, .. }));
}
