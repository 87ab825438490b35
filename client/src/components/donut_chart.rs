//! Donut chart drawn with stroke dashes on stacked SVG circles.

#[cfg(test)]
#[path = "donut_chart_test.rs"]
mod donut_chart_test;

use leptos::prelude::*;

use crate::util::chart_geometry::{donut_segments, fmt_num};

const RADIUS: f64 = 40.0;
const STROKE_WIDTH: &str = "16";

/// Fill colors cycled by series index.
pub const SERIES_COLORS: [&str; 6] = ["#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed", "#0891b2"];

pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Donut of labelled values with a legend. Renders an empty ring when every
/// value is zero.
#[component]
pub fn DonutChart(#[prop(into)] slices: Signal<Vec<(String, f64)>>) -> impl IntoView {
    let segments = move || {
        let values: Vec<f64> = slices.with(|s| s.iter().map(|(_, v)| *v).collect());
        donut_segments(&values, RADIUS)
    };

    view! {
        <div class="donut">
            <svg class="donut__chart" viewBox="0 0 120 120" width="160" height="160">
                <circle
                    cx="60"
                    cy="60"
                    r=fmt_num(RADIUS)
                    fill="none"
                    stroke="#e5e7eb"
                    stroke-width=STROKE_WIDTH
                ></circle>
                {move || {
                    segments()
                        .into_iter()
                        .map(|seg| {
                            view! {
                                <circle
                                    cx="60"
                                    cy="60"
                                    r=fmt_num(RADIUS)
                                    fill="none"
                                    stroke=series_color(seg.index)
                                    stroke-width=STROKE_WIDTH
                                    stroke-dasharray=seg.dash_array()
                                    stroke-dashoffset=fmt_num(seg.dash_offset)
                                    transform="rotate(-90 60 60)"
                                ></circle>
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <ul class="chart-legend">
                {move || {
                    slices
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, (label, value))| {
                            view! {
                                <li>
                                    <span
                                        class="chart-legend__swatch"
                                        style=format!("background:{}", series_color(i))
                                    ></span>
                                    {label}
                                    ": "
                                    {fmt_num(value)}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
