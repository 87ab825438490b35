//! Process bottleneck analysis.
//!
//! The analysis covers the whole task history, so it is fetched on mount
//! without any input and can be re-run on demand.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::result_table::ResultTable;
use crate::components::shell::Shell;
use crate::router::{PagePath, PageScope};
use crate::state::AppState;
use crate::state::catalog::Loadable;

#[component]
pub fn ProcesosPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let result = Signal::derive(move || state.bottlenecks.with(|b| b.ready().cloned()));
    let error = move || state.bottlenecks.with(|b| b.error().map(str::to_owned));
    let loading = move || state.bottlenecks.with(Loadable::is_loading);

    let on_refresh = move |_| refresh(state, None);

    view! {
        <Shell active=PagePath::Procesos title="Cuellos de botella">
            <div class="toolbar">
                <button type="button" disabled=loading on:click=on_refresh>
                    "Actualizar"
                </button>
            </div>
            <Show when=loading>
                <p class="loading">"Analizando procesos..."</p>
            </Show>
            <Show when=move || error().is_some()>
                <p class="error">{move || error().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading() && result.with(Option::is_none) && error().is_none()>
                <p class="empty">"Sin resultados."</p>
            </Show>
            <ResultTable result=result/>
        </Shell>
    }
}

/// Fetch the analysis into shared state. With a scope, the response is
/// dropped once the page is left.
fn refresh(state: AppState, scope: Option<PageScope>) {
    state.bottlenecks.set(Loadable::Loading);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::session::LocalSession;

        let result = super::api().detect_bottlenecks().await;
        match &scope {
            Some(scope) => {
                super::settle(scope, &LocalSession, result, |v| state.bottlenecks.set(v));
            }
            None => {
                let loaded = Loadable::from_result(result.map_err(|e| {
                    super::failure_message(&e, &LocalSession, |_| crate::router::go(PagePath::Login))
                }));
                state.bottlenecks.set(loaded);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = scope;
}

pub fn render() -> AnyView {
    view! { <ProcesosPage/> }.into_any()
}

pub fn init(scope: &PageScope) {
    match use_context::<AppState>() {
        Some(state) => refresh(state, Some(scope.clone())),
        None => log::warn!("app state missing; bottlenecks not loaded"),
    }
}
