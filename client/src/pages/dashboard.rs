//! Dashboard page: task summary cards and charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Figures are derived from the shared task and
//! area catalogs, which `init` refreshes on mount and then periodically while
//! the page stays mounted.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::CatalogNeeds;
use crate::components::area_chart::AreaChart;
use crate::components::donut_chart::DonutChart;
use crate::components::shell::Shell;
use crate::router::{PagePath, PageScope};
use crate::state::AppState;
use crate::util::task_summary::{AreaSeries, TaskSummary, summarize, tasks_per_area_by_month};

/// Seconds between background refreshes while the dashboard is shown.
pub const REFRESH_INTERVAL_SECS: u64 = 30;

const NEEDS: CatalogNeeds = CatalogNeeds { tasks: true, areas: true, users: false };

/// Today's date as `YYYY-MM-DD` in UTC; empty outside the browser.
fn today_iso() -> String {
    #[cfg(feature = "csr")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

fn percent(rate: f64) -> String {
    format!("{:.0}%", rate * 100.0)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let today = today_iso();

    let summary: Memo<TaskSummary> = Memo::new(move |_| state.catalog.with(|c| summarize(c.tasks.items(), &today)));
    let by_area: Memo<AreaSeries> =
        Memo::new(move |_| state.catalog.with(|c| tasks_per_area_by_month(c.tasks.items(), c.areas.items())));
    #[allow(clippy::cast_precision_loss)]
    let slices = Signal::derive(move || {
        summary.with(|s| {
            s.by_status.iter().map(|(status, n)| (status.label().to_owned(), *n as f64)).collect::<Vec<_>>()
        })
    });
    let loading = move || state.catalog.with(|c| c.tasks.is_loading());
    let error = move || state.catalog.with(|c| c.tasks.error().or(c.areas.error()).map(str::to_owned));

    view! {
        <Shell active=PagePath::Dashboard title="Panel">
            <Show when=loading>
                <p class="loading">"Cargando tareas..."</p>
            </Show>
            <Show when=move || error().is_some()>
                <p class="error">{move || error().unwrap_or_default()}</p>
            </Show>
            <section class="cards">
                <div class="card">
                    <span class="card__label">"Tareas"</span>
                    <span class="card__value">{move || summary.get().total}</span>
                </div>
                <div class="card">
                    <span class="card__label">"Vencidas"</span>
                    <span class="card__value">{move || summary.get().overdue}</span>
                </div>
                <div class="card">
                    <span class="card__label">"Completadas"</span>
                    <span class="card__value">{move || percent(summary.get().completion_rate)}</span>
                </div>
            </section>
            <section class="charts">
                <div class="chart-panel">
                    <h2>"Tareas por estado"</h2>
                    <DonutChart slices=slices/>
                </div>
                <div class="chart-panel">
                    <h2>"Tareas por área y mes"</h2>
                    <AreaChart data=by_area/>
                </div>
            </section>
        </Shell>
    }
}

pub fn render() -> AnyView {
    view! { <DashboardPage/> }.into_any()
}

pub fn init(scope: &PageScope) {
    super::load_catalog(scope, NEEDS);

    #[cfg(feature = "csr")]
    {
        let scope = scope.clone();
        let Some(owner) = Owner::current() else {
            return;
        };
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(REFRESH_INTERVAL_SECS)).await;
                if scope.is_cancelled() {
                    break;
                }
                owner.with(|| super::load_catalog(&scope, NEEDS));
            }
        });
    }
}
