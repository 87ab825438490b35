//! SVG geometry for dashboard charts.
//!
//! Donut segments use the stroke-dasharray technique on a single circle:
//! each segment is a dash whose offset skips the segments before it.
//! Stacked areas are closed polygons between consecutive cumulative sums.

#[cfg(test)]
#[path = "chart_geometry_test.rs"]
mod chart_geometry_test;

use std::f64::consts::TAU;

/// One donut slice expressed as stroke-dash parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    /// Index of the source value.
    pub index: usize,
    pub fraction: f64,
    pub dash_length: f64,
    pub gap_length: f64,
    pub dash_offset: f64,
}

impl DonutSegment {
    /// Value for the `stroke-dasharray` attribute.
    pub fn dash_array(&self) -> String {
        format!("{} {}", fmt_num(self.dash_length), fmt_num(self.gap_length))
    }
}

pub fn circumference(radius: f64) -> f64 {
    TAU * radius
}

fn clean(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Dash parameters for each non-zero value. Zero total yields no segments.
pub fn donut_segments(values: &[f64], radius: f64) -> Vec<DonutSegment> {
    let total: f64 = values.iter().copied().map(clean).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let c = circumference(radius);
    let mut before = 0.0;
    let mut segments = Vec::new();
    for (index, value) in values.iter().copied().map(clean).enumerate() {
        if value == 0.0 {
            continue;
        }
        let fraction = value / total;
        let dash_length = c * fraction;
        segments.push(DonutSegment {
            index,
            fraction,
            dash_length,
            gap_length: c - dash_length,
            dash_offset: -(c * before),
        });
        before += fraction;
    }
    segments
}

/// Running column sums: `result[i][j]` is the sum of `series[0..=i][j]`.
/// Short series are padded with zeros to the longest length.
pub fn stacked_columns(series: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = series.iter().map(Vec::len).max().unwrap_or(0);
    let mut running = vec![0.0; n];
    series
        .iter()
        .map(|s| {
            for (j, acc) in running.iter_mut().enumerate() {
                *acc += s.get(j).copied().map_or(0.0, clean);
            }
            running.clone()
        })
        .collect()
}

/// SVG path data for each stacked layer, bottom layer first.
pub fn stacked_area_paths(series: &[Vec<f64>], width: f64, height: f64) -> Vec<String> {
    let columns = stacked_columns(series);
    let n = columns.first().map_or(0, Vec::len);
    if n < 2 {
        let flat = format!("M 0,{h} L {w},{h} Z", h = fmt_num(height), w = fmt_num(width));
        return vec![flat; series.len()];
    }

    let max_total = columns.last().map_or(0.0, |top| top.iter().copied().fold(0.0, f64::max));
    let scale = if max_total > 0.0 { height / max_total } else { 0.0 };
    #[allow(clippy::cast_precision_loss)]
    let x = |j: usize| width * j as f64 / (n - 1) as f64;
    let y = |v: f64| height - v * scale;

    let zeros = vec![0.0; n];
    columns
        .iter()
        .enumerate()
        .map(|(i, upper)| {
            let lower = if i == 0 { &zeros } else { &columns[i - 1] };
            let mut d = String::new();
            for (j, v) in upper.iter().enumerate() {
                let cmd = if j == 0 { "M" } else { " L" };
                d.push_str(&format!("{cmd} {},{}", fmt_num(x(j)), fmt_num(y(*v))));
            }
            for j in (0..n).rev() {
                d.push_str(&format!(" L {},{}", fmt_num(x(j)), fmt_num(y(lower[j]))));
            }
            d.push_str(" Z");
            d
        })
        .collect()
}

/// Format with at most two decimals, dropping trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}
