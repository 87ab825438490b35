//! Area catalog: list, create, delete.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::{CatalogNeeds, run_mutation};
use crate::components::shell::Shell;
use crate::net::types::Area;
use crate::router::{PagePath, PageScope};
use crate::state::AppState;
use crate::util::validation::validate_area;

#[component]
pub fn AreasPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let nombre = RwSignal::new(String::new());
    let descripcion = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let list_error = move || state.catalog.with(|c| c.areas.error().map(str::to_owned));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let area = match validate_area(&nombre.get(), &descripcion.get()) {
            Ok(area) => area,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        message.set(String::new());
        run_mutation(
            message,
            move |api| async move { api.create_area(&area).await },
            move |created: Area| {
                state.catalog.update(|c| c.upsert_area(created));
                nombre.set(String::new());
                descripcion.set(String::new());
            },
        );
    };

    let delete = move |id: String| {
        run_mutation(
            message,
            {
                let id = id.clone();
                move |api| async move { api.delete_area(&id).await }
            },
            move |()| state.catalog.update(|c| c.remove_area(&id)),
        );
    };

    view! {
        <Shell active=PagePath::Areas title="Áreas">
            <form class="entity-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Nombre"
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Descripción"
                    prop:value=move || descripcion.get()
                    on:input=move |ev| descripcion.set(event_target_value(&ev))
                />
                <button type="submit">"Crear área"</button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="error">{move || message.get()}</p>
            </Show>
            <Show when=move || list_error().is_some()>
                <p class="error">{move || list_error().unwrap_or_default()}</p>
            </Show>
            <table class="entity-table">
                <thead>
                    <tr>
                        <th>"Nombre"</th>
                        <th>"Descripción"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .catalog
                            .with(|c| c.areas.items().to_vec())
                            .into_iter()
                            .map(|area| {
                                let id = area.id.clone();
                                view! {
                                    <tr>
                                        <td>{area.nombre}</td>
                                        <td>{area.descripcion}</td>
                                        <td class="row-actions">
                                            <button type="button" on:click=move |_| delete(id.clone())>
                                                "Eliminar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Shell>
    }
}

pub fn render() -> AnyView {
    view! { <AreasPage/> }.into_any()
}

pub fn init(scope: &PageScope) {
    super::load_catalog(scope, CatalogNeeds { areas: true, ..CatalogNeeds::default() });
}
