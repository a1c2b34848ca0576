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

//! SVG chart output.
//!
//! Bar series go on the primary axis; line series share a secondary axis on
//! the right so small error values stay readable next to percentages.

use crate::error::CliError;
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use symbench_core::{ChartData, ChartSink, SeriesKind, SymbenchError};
use tracing::info;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

const PALETTE: [RGBColor; 4] = [
    RGBColor(52, 152, 219), //  blue
    RGBColor(231, 76, 60),  //  red
    RGBColor(46, 204, 113), //  emerald
    RGBColor(230, 160, 0),  //  amber
];

fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

fn axis_top(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.15
    } else {
        1.0
    }
}

/// Writes each chart to `<dir>/<slug>.svg`.
pub struct SvgChartSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SvgChartSink {
    /// Create the sink, creating `dir` if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, CliError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| CliError::io_error(&dir, e))?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// Files written so far, in drawing order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ChartSink for SvgChartSink {
    fn draw(&mut self, chart: &ChartData) -> symbench_core::Result<()> {
        let path = self.dir.join(format!("{}.svg", chart.slug));
        draw_svg(&path, chart).map_err(|e| SymbenchError::render(chart.slug.clone(), e))?;
        info!(chart = %chart.slug, path = %path.display(), "saved chart");
        self.written.push(path);
        Ok(())
    }
}

fn draw_svg(output: &Path, chart: &ChartData) -> Result<(), Box<dyn std::error::Error>> {
    let n = chart.labels.len().max(1);
    let bars: Vec<_> = chart
        .series
        .iter()
        .filter(|s| s.kind == SeriesKind::Bar)
        .collect();
    let lines: Vec<_> = chart
        .series
        .iter()
        .filter(|s| s.kind == SeriesKind::Line)
        .collect();

    let root = SVGBackend::new(output, (900, 540)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 18))
        .margin(14)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .right_y_label_area_size(if lines.is_empty() { 0 } else { 70 })
        .build_cartesian_2d(0f64..n as f64, 0f64..axis_top(chart.max_value(SeriesKind::Bar)))?
        .set_secondary_coord(
            0f64..n as f64,
            0f64..axis_top(chart.max_value(SeriesKind::Line)),
        );

    let labels = &chart.labels;
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(n * 2 + 1)
        .y_desc(chart.y_label.as_str())
        .x_label_formatter(&|x| {
            // Only label at bar centers (0.5, 1.5, ...).
            let centered = x - 0.5;
            if (centered - centered.round()).abs() > 0.1 || centered < 0.0 {
                return String::new();
            }
            labels
                .get(centered.round() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .draw()?;

    if !lines.is_empty() {
        let names: Vec<&str> = lines.iter().map(|s| s.name.as_str()).collect();
        ctx.configure_secondary_axes()
            .y_desc(names.join(" / "))
            .draw()?;
    }

    let slot = 0.8 / bars.len().max(1) as f64;
    for (si, series) in bars.iter().enumerate() {
        let color = series_color(si);
        ctx.draw_series(series.values.iter().enumerate().map(|(i, v)| {
            let x0 = i as f64 + 0.1 + si as f64 * slot;
            Rectangle::new([(x0, 0.0), (x0 + slot, *v)], color.mix(0.8).filled())
        }))?
        .label(series.name.as_str())
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    for (li, series) in lines.iter().enumerate() {
        let color = series_color(bars.len() + li);
        let points: Vec<(f64, f64)> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as f64 + 0.5, *v))
            .collect();
        ctx.draw_secondary_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(series.name.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .margin(12)
        .background_style(WHITE.mix(0.9))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 13))
        .draw()?;

    root.present()?;
    Ok(())
}
