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

//! Chart data handed to a plotting backend.
//!
//! The core never draws anything. It builds one [`ChartData`] per metric
//! family and passes it to a [`ChartSink`]; nothing flows back.

use crate::error::Result;
use crate::metrics::AccuracyMetrics;
use crate::perf::PerformanceRecord;

/// How a series should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Bars on the primary axis.
    Bar,
    /// A line on the secondary axis.
    Line,
}

/// One named numeric series, parallel to [`ChartData::labels`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend name.
    pub name: String,
    /// Drawing style.
    pub kind: SeriesKind,
    /// One value per label.
    pub values: Vec<f64>,
}

/// A single figure: ordered labels plus one or more parallel series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Figure title.
    pub title: String,
    /// File-name friendly identifier.
    pub slug: String,
    /// Primary axis description.
    pub y_label: String,
    /// Category labels, in order.
    pub labels: Vec<String>,
    /// Series, each with `labels.len()` values.
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    /// Largest value over all series of the given kind, or `0.0`.
    pub fn max_value(&self, kind: SeriesKind) -> f64 {
        self.series
            .iter()
            .filter(|s| s.kind == kind)
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// A plotting backend.
pub trait ChartSink {
    /// Render one figure.
    fn draw(&mut self, chart: &ChartData) -> Result<()>;
}

/// Execution-time and speedup figures, one bar per record.
pub fn performance_charts(records: &[PerformanceRecord]) -> Vec<ChartData> {
    let labels: Vec<String> = records.iter().map(PerformanceRecord::display_label).collect();

    vec![
        ChartData {
            title: "Execution Time of Each Configuration".to_string(),
            slug: "execution_time".to_string(),
            y_label: "Execution Time (s)".to_string(),
            labels: labels.clone(),
            series: vec![ChartSeries {
                name: "Time (s)".to_string(),
                kind: SeriesKind::Bar,
                values: records.iter().map(|r| r.time_seconds).collect(),
            }],
        },
        ChartData {
            title: "Speedup of Each Configuration".to_string(),
            slug: "speedup".to_string(),
            y_label: "Speedup (vs Serial)".to_string(),
            labels,
            series: vec![ChartSeries {
                name: "Speedup".to_string(),
                kind: SeriesKind::Bar,
                values: records.iter().map(|r| r.speedup).collect(),
            }],
        },
    ]
}

/// Combined accuracy figure: match percentage bars with MAE and RMSE lines.
pub fn accuracy_chart(metrics: &[AccuracyMetrics]) -> ChartData {
    ChartData {
        title: "Accuracy Comparison (vs Serial)".to_string(),
        slug: "accuracy".to_string(),
        y_label: "Exact Match (%)".to_string(),
        labels: metrics.iter().map(|m| m.method.to_string()).collect(),
        series: vec![
            ChartSeries {
                name: "Exact Match (%)".to_string(),
                kind: SeriesKind::Bar,
                values: metrics.iter().map(|m| m.percent_exact_match).collect(),
            },
            ChartSeries {
                name: "MAE".to_string(),
                kind: SeriesKind::Line,
                values: metrics.iter().map(|m| m.mean_absolute_error).collect(),
            },
            ChartSeries {
                name: "RMSE".to_string(),
                kind: SeriesKind::Line,
                values: metrics.iter().map(|m| m.root_mean_square_error).collect(),
            },
        ],
    }
}

/// Draw every chart in order, stopping at the first failure.
pub fn draw_all(sink: &mut dyn ChartSink, charts: &[ChartData]) -> Result<()> {
    for chart in charts {
        sink.draw(chart)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;

    #[derive(Default)]
    struct Recorder {
        titles: Vec<String>,
    }

    impl ChartSink for Recorder {
        fn draw(&mut self, chart: &ChartData) -> Result<()> {
            self.titles.push(chart.title.clone());
            Ok(())
        }
    }

    #[test]
    fn test_performance_charts_are_parallel() {
        let mut records = vec![
            PerformanceRecord::new(Method::Serial, 2.0, 1, 1),
            PerformanceRecord::new(Method::Mpi, 0.5, 4, 1),
        ];
        records[0].speedup = 1.0;
        records[1].speedup = 4.0;

        let charts = performance_charts(&records);
        assert_eq!(charts.len(), 2);
        for chart in &charts {
            assert_eq!(chart.labels, vec!["Serial (1 core, 1 thread)", "MPI (4 processes)"]);
            assert!(chart.series.iter().all(|s| s.values.len() == chart.labels.len()));
        }
        assert_eq!(charts[1].series[0].values, vec![1.0, 4.0]);
        assert_eq!(charts[1].max_value(SeriesKind::Bar), 4.0);
    }

    #[test]
    fn test_accuracy_chart_series() {
        let metrics = vec![AccuracyMetrics {
            method: Method::Hybrid,
            percent_exact_match: 90.0,
            mean_absolute_error: 0.5,
            root_mean_square_error: 0.75,
        }];
        let chart = accuracy_chart(&metrics);
        assert_eq!(chart.labels, vec!["Hybrid"]);
        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.max_value(SeriesKind::Line), 0.75);
    }

    #[test]
    fn test_draw_all_visits_every_chart() {
        let mut sink = Recorder::default();
        let charts = performance_charts(&[]);
        draw_all(&mut sink, &charts).unwrap();
        assert_eq!(sink.titles.len(), 2);
    }
}
