//! Shared page body for the model inference screens.
//!
//! DESIGN
//! ======
//! Risk, duration, recommendation and performance differ only in the subject
//! they are asked about (a task or a user), the endpoint, and their copy.
//! [`InferenceKind`] carries those differences; one component renders all
//! four. Results are opaque JSON shown through `ResultTable`.

#[cfg(test)]
#[path = "inference_test.rs"]
mod inference_test;

use leptos::prelude::*;

use super::CatalogNeeds;
use crate::components::result_table::ResultTable;
use crate::components::shell::Shell;
use crate::net::api::{Api, ApiError};
use crate::net::types::InferenceResult;
use crate::router::{PagePath, PageScope};
use crate::state::AppState;
use crate::state::catalog::CatalogState;
use crate::state::inference::InferenceState;
use crate::util::validation::validate_selection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InferenceKind {
    Riesgo,
    Duracion,
    Recomendacion,
    Rendimiento,
}

/// What an inference request is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    Task,
    User,
}

impl InferenceKind {
    pub fn page(self) -> PagePath {
        match self {
            InferenceKind::Riesgo => PagePath::Riesgo,
            InferenceKind::Duracion => PagePath::Duracion,
            InferenceKind::Recomendacion => PagePath::Recomendacion,
            InferenceKind::Rendimiento => PagePath::Rendimiento,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            InferenceKind::Riesgo => "Clasificación de riesgo",
            InferenceKind::Duracion => "Predicción de duración",
            InferenceKind::Recomendacion => "Recomendación de responsable",
            InferenceKind::Rendimiento => "Análisis de rendimiento",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            InferenceKind::Riesgo => "Estima la probabilidad de que una tarea se retrase.",
            InferenceKind::Duracion => "Estima las horas que tomará completar una tarea.",
            InferenceKind::Recomendacion => "Sugiere a quién asignar una tarea.",
            InferenceKind::Rendimiento => "Resume el desempeño reciente de un usuario.",
        }
    }

    pub fn subject(self) -> Subject {
        match self {
            InferenceKind::Rendimiento => Subject::User,
            _ => Subject::Task,
        }
    }

    pub(crate) fn needs(self) -> CatalogNeeds {
        match self.subject() {
            Subject::Task => CatalogNeeds { tasks: true, ..CatalogNeeds::default() },
            Subject::User => CatalogNeeds { users: true, ..CatalogNeeds::default() },
        }
    }

    pub async fn run(self, api: &Api, id: &str) -> Result<InferenceResult, ApiError> {
        match self {
            InferenceKind::Riesgo => api.classify_risk(id).await,
            InferenceKind::Duracion => api.predict_duration(id).await,
            InferenceKind::Recomendacion => api.recommend_assignee(id).await,
            InferenceKind::Rendimiento => api.analyze_performance(id).await,
        }
    }
}

/// `(id, label)` choices for the subject selector.
pub fn subject_options(kind: InferenceKind, catalog: &CatalogState) -> Vec<(String, String)> {
    match kind.subject() {
        Subject::Task => catalog.tasks.items().iter().map(|t| (t.id.clone(), t.titulo.clone())).collect(),
        Subject::User => catalog.users.items().iter().map(|u| (u.id.clone(), u.nombre.clone())).collect(),
    }
}

#[component]
pub fn InferencePage(kind: InferenceKind) -> impl IntoView {
    let state = expect_context::<AppState>();
    let form = RwSignal::new(InferenceState::default());

    let options = move || state.catalog.with(|c| subject_options(kind, c));
    let placeholder = match kind.subject() {
        Subject::Task => "Selecciona una tarea",
        Subject::User => "Selecciona un usuario",
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = match validate_selection(&form.get().selected) {
            Ok(id) => id,
            Err(msg) => {
                form.update(|f| f.reject(msg));
                return;
            }
        };
        let mut started = false;
        form.update(|f| started = f.begin());
        if !started {
            return;
        }

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::session::LocalSession;

            let outcome = kind.run(&super::api(), &id).await.map_err(|e| {
                super::failure_message(&e, &LocalSession, |_| crate::router::go(PagePath::Login))
            });
            form.try_update(|f| f.finish(outcome));
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    view! {
        <Shell active=kind.page() title=kind.title()>
            <p class="page-description">{kind.description()}</p>
            <form class="entity-form" on:submit=on_submit>
                <select
                    prop:value=move || form.get().selected
                    on:change=move |ev| form.update(|f| f.selected = event_target_value(&ev))
                >
                    <option value="">{placeholder}</option>
                    {move || {
                        options()
                            .into_iter()
                            .map(|(id, label)| view! { <option value=id>{label}</option> })
                            .collect_view()
                    }}
                </select>
                <button type="submit" disabled=move || form.get().running>
                    "Analizar"
                </button>
            </form>
            <Show when=move || form.get().running>
                <p class="loading">"Consultando el modelo..."</p>
            </Show>
            <Show when=move || form.get().error.is_some()>
                <p class="error">{move || form.get().error.unwrap_or_default()}</p>
            </Show>
            <ResultTable result=Signal::derive(move || form.get().result)/>
        </Shell>
    }
}

pub(crate) fn init_for(kind: InferenceKind, scope: &PageScope) {
    super::load_catalog(scope, kind.needs());
}
