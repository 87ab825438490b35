//! Stacked area chart of task counts per area and due month.

use leptos::prelude::*;

use super::donut_chart::series_color;
use crate::util::chart_geometry::stacked_area_paths;
use crate::util::task_summary::AreaSeries;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 180.0;

#[component]
pub fn AreaChart(#[prop(into)] data: Signal<AreaSeries>) -> impl IntoView {
    let paths = move || {
        data.with(|d| {
            let values: Vec<Vec<f64>> = d.series.iter().map(|(_, v)| v.clone()).collect();
            stacked_area_paths(&values, WIDTH, HEIGHT)
        })
    };
    let is_empty = move || data.with(|d| d.months.is_empty());

    view! {
        <div class="area-chart">
            <Show
                when=move || !is_empty()
                fallback=|| view! { <p class="empty">"No hay tareas con fecha límite."</p> }
            >
                <svg class="area-chart__plot" viewBox=format!("0 0 {WIDTH} {HEIGHT}")>
                    {move || {
                        paths()
                            .into_iter()
                            .enumerate()
                            .map(|(i, d)| {
                                view! { <path d=d fill=series_color(i) fill-opacity="0.75"></path> }
                            })
                            .collect_view()
                    }}
                </svg>
                <div class="area-chart__months">
                    {move || {
                        data.get().months.into_iter().map(|m| view! { <span>{m}</span> }).collect_view()
                    }}
                </div>
                <ul class="chart-legend">
                    {move || {
                        data.get()
                            .series
                            .into_iter()
                            .enumerate()
                            .map(|(i, (label, _))| {
                                view! {
                                    <li>
                                        <span
                                            class="chart-legend__swatch"
                                            style=format!("background:{}", series_color(i))
                                        ></span>
                                        {label}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
