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

//! Report rendering.
//!
//! Renderers only format values that have already been computed.

use crate::error::{Result, SymbenchError};
use crate::method::Method;
use crate::metrics::{AccuracyMetrics, KeySetDivergence};
use crate::perf::PerformanceRecord;
use serde::Serialize;
use std::str::FromStr;

/// Output format for rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReportFormat {
    /// Fixed-width text tables.
    #[default]
    Text,
    /// Markdown tables.
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for ReportFormat {
    type Err = SymbenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(SymbenchError::invalid_input(format!(
                "unknown report format '{}' (expected text, markdown or json)",
                other
            ))),
        }
    }
}

/// Keyword-set divergence of one method, for report notes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivergenceNote {
    /// Method whose counts diverge.
    pub method: Method,
    /// The divergence itself.
    #[serde(flatten)]
    pub divergence: KeySetDivergence,
}

/// Fixed-width performance table.
pub fn performance_table(records: &[PerformanceRecord]) -> String {
    let mut out = String::new();
    out.push_str("| Method   | Configuration        | Time (s)   | Speedup (vs Serial) |\n");
    out.push_str("|----------|----------------------|------------|---------------------|\n");
    for r in records {
        out.push_str(&format!(
            "| {:<8} | {:<20} | {:<10.6} | {:<19.2} |\n",
            r.method.as_str(),
            r.config_label,
            r.time_seconds,
            r.speedup
        ));
    }
    out
}

/// Fixed-width accuracy table.
pub fn accuracy_table(metrics: &[AccuracyMetrics]) -> String {
    let mut out = String::new();
    out.push_str("| Method   | Match (%)  | MAE          | RMSE         |\n");
    out.push_str("|----------|------------|--------------|--------------|\n");
    for m in metrics {
        out.push_str(&format!(
            "| {:<8} | {:<10.2} | {:<12.6} | {:<12.6} |\n",
            m.method.as_str(),
            m.percent_exact_match,
            m.mean_absolute_error,
            m.root_mean_square_error
        ));
    }
    out
}

/// Plain-text divergence notes; empty when no method diverges.
pub fn divergence_notes(notes: &[DivergenceNote]) -> String {
    let mut out = String::new();
    for note in notes.iter().filter(|n| !n.divergence.is_empty()) {
        if !note.divergence.missing.is_empty() {
            out.push_str(&format!(
                "note: {} is missing {} keyword(s): {}\n",
                note.method,
                note.divergence.missing.len(),
                note.divergence.missing.join(", ")
            ));
        }
        if !note.divergence.extra.is_empty() {
            out.push_str(&format!(
                "note: {} has {} keyword(s) outside the serial set: {}\n",
                note.method,
                note.divergence.extra.len(),
                note.divergence.extra.join(", ")
            ));
        }
    }
    out
}

fn performance_markdown(records: &[PerformanceRecord]) -> String {
    let mut md = String::from("## Performance\n\n");
    md.push_str("| Method | Configuration | Time (s) | Speedup (vs Serial) |\n");
    md.push_str("|--------|---------------|----------|---------------------|\n");
    for r in records {
        md.push_str(&format!(
            "| {} | {} | {:.6} | {:.2} |\n",
            r.method, r.config_label, r.time_seconds, r.speedup
        ));
    }
    md
}

fn accuracy_markdown(metrics: &[AccuracyMetrics], notes: &[DivergenceNote]) -> String {
    let mut md = String::from("## Accuracy (vs Serial)\n\n");
    md.push_str("| Method | Match (%) | MAE | RMSE |\n");
    md.push_str("|--------|-----------|-----|------|\n");
    for m in metrics {
        md.push_str(&format!(
            "| {} | {:.2} | {:.6} | {:.6} |\n",
            m.method, m.percent_exact_match, m.mean_absolute_error, m.root_mean_square_error
        ));
    }

    let text_notes = divergence_notes(notes);
    if !text_notes.is_empty() {
        md.push_str("\n### Keyword set divergence\n\n");
        for line in text_notes.lines() {
            md.push_str(&format!("- {}\n", line.trim_start_matches("note: ")));
        }
    }
    md
}

#[derive(Serialize)]
struct AccuracyJson<'a> {
    metrics: &'a [AccuracyMetrics],
    divergence: Vec<&'a DivergenceNote>,
}

impl<'a> AccuracyJson<'a> {
    fn new(metrics: &'a [AccuracyMetrics], notes: &'a [DivergenceNote]) -> Self {
        Self {
            metrics,
            divergence: notes.iter().filter(|n| !n.divergence.is_empty()).collect(),
        }
    }
}

#[derive(Serialize)]
struct ReportJson<'a> {
    performance: &'a [PerformanceRecord],
    accuracy: AccuracyJson<'a>,
}

/// Render the performance report in `format`.
pub fn render_performance(records: &[PerformanceRecord], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(performance_table(records)),
        ReportFormat::Markdown => Ok(performance_markdown(records)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

/// Render the accuracy report in `format`, with divergence notes if any.
pub fn render_accuracy(
    metrics: &[AccuracyMetrics],
    notes: &[DivergenceNote],
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Text => {
            let mut out = accuracy_table(metrics);
            let text_notes = divergence_notes(notes);
            if !text_notes.is_empty() {
                out.push('\n');
                out.push_str(&text_notes);
            }
            Ok(out)
        }
        ReportFormat::Markdown => Ok(accuracy_markdown(metrics, notes)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&AccuracyJson::new(
            metrics, notes,
        ))?),
    }
}

/// Render the performance report followed by the accuracy report.
///
/// Text and Markdown join the two sections with a blank line. JSON is a
/// single object with `performance` and `accuracy` members.
pub fn render_report(
    records: &[PerformanceRecord],
    metrics: &[AccuracyMetrics],
    notes: &[DivergenceNote],
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Text | ReportFormat::Markdown => Ok(format!(
            "{}\n{}",
            render_performance(records, format)?,
            render_accuracy(metrics, notes, format)?
        )),
        ReportFormat::Json => {
            let payload = ReportJson {
                performance: records,
                accuracy: AccuracyJson::new(metrics, notes),
            };
            Ok(serde_json::to_string_pretty(&payload)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<PerformanceRecord> {
        let mut serial = PerformanceRecord::new(Method::Serial, 4.0, 1, 1);
        serial.speedup = 1.0;
        let mut omp = PerformanceRecord::new(Method::OpenMp, 1.25, 1, 4);
        omp.speedup = 3.2;
        vec![serial, omp]
    }

    fn sample_metrics() -> Vec<AccuracyMetrics> {
        vec![AccuracyMetrics {
            method: Method::Mpi,
            percent_exact_match: 50.0,
            mean_absolute_error: 1.0,
            root_mean_square_error: 2f64.sqrt(),
        }]
    }

    #[test]
    fn test_performance_table_rows() {
        let table = performance_table(&sample_records());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[2],
            "| Serial   | 1 core, 1 thread     | 4.000000   | 1.00                |"
        );
        assert_eq!(
            lines[3],
            "| OpenMP   | 4 threads            | 1.250000   | 3.20                |"
        );
    }

    #[test]
    fn test_accuracy_table_rows() {
        let table = accuracy_table(&sample_metrics());
        let row = table.lines().nth(2).unwrap();
        assert_eq!(row, "| MPI      | 50.00      | 1.000000     | 1.414214     |");
    }

    #[test]
    fn test_empty_tables_keep_headers() {
        assert_eq!(performance_table(&[]).lines().count(), 2);
        assert_eq!(accuracy_table(&[]).lines().count(), 2);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("TEXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("html".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_divergence_notes_only_for_diverging() {
        let notes = vec![
            DivergenceNote {
                method: Method::OpenMp,
                divergence: KeySetDivergence::default(),
            },
            DivergenceNote {
                method: Method::Hybrid,
                divergence: KeySetDivergence {
                    missing: vec!["rash".to_string()],
                    extra: vec![],
                },
            },
        ];
        let text = divergence_notes(&notes);
        assert_eq!(text, "note: Hybrid is missing 1 keyword(s): rash\n");

        let rendered = render_accuracy(&sample_metrics(), &notes, ReportFormat::Markdown).unwrap();
        assert!(rendered.contains("### Keyword set divergence"));
        assert!(rendered.contains("- Hybrid is missing 1 keyword(s): rash"));
    }

    #[test]
    fn test_json_output() {
        let json = render_performance(&sample_records(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["method"], "OpenMP");
        assert_eq!(value[1]["config_label"], "4 threads");

        let json = render_accuracy(&sample_metrics(), &[], ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metrics"][0]["percent_exact_match"], 50.0);
        assert!(value["divergence"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_combined_json_is_one_document() {
        let notes = vec![DivergenceNote {
            method: Method::Mpi,
            divergence: KeySetDivergence {
                missing: vec![],
                extra: vec!["say \"hi\"".to_string()],
            },
        }];
        let json =
            render_report(&sample_records(), &sample_metrics(), &notes, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value.as_object().unwrap().len(), 2);
        assert_eq!(value["performance"][0]["method"], "Serial");
        assert_eq!(value["accuracy"]["metrics"][0]["method"], "MPI");
        assert_eq!(value["accuracy"]["divergence"][0]["extra"][0], "say \"hi\"");
        assert!(json.starts_with("{\n  \"performance\": ["));
    }

    #[test]
    fn test_combined_text_keeps_section_order() {
        let text =
            render_report(&sample_records(), &sample_metrics(), &[], ReportFormat::Text).unwrap();
        let perf = text.find("Speedup (vs Serial)").unwrap();
        let acc = text.find("Match (%)").unwrap();
        assert!(perf < acc);
        assert!(text.contains("|\n\n| Method   | Match (%)"));
    }

    #[test]
    fn test_markdown_performance() {
        let md = render_performance(&sample_records(), ReportFormat::Markdown).unwrap();
        assert!(md.starts_with("## Performance"));
        assert!(md.contains("| OpenMP | 4 threads | 1.250000 | 3.20 |"));
    }
}
