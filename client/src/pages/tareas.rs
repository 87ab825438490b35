//! Task list with status filter, creation form, status advance and delete.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::{CatalogNeeds, run_mutation};
use crate::components::shell::Shell;
use crate::net::types::{Priority, Task, TaskStatus, TaskUpdate};
use crate::router::{PagePath, PageScope};
use crate::state::AppState;
use crate::util::task_summary::{area_name, filter_by_status, user_name};
use crate::util::validation::{TaskForm, validate_task};

#[component]
pub fn TareasPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let filter = RwSignal::new(None::<TaskStatus>);
    let form = RwSignal::new(TaskForm::default());
    let message = RwSignal::new(String::new());

    let visible = move || state.catalog.with(|c| filter_by_status(c.tasks.items(), filter.get()));
    let list_error = move || state.catalog.with(|c| c.tasks.error().map(str::to_owned));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_task = match validate_task(&form.get()) {
            Ok(task) => task,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        message.set(String::new());
        run_mutation(
            message,
            move |api| async move { api.create_task(&new_task).await },
            move |task: Task| {
                state.catalog.update(|c| c.upsert_task(task));
                form.set(TaskForm::default());
            },
        );
    };

    let advance = move |task: Task| {
        let next = task.estado.advance();
        if next == task.estado {
            return;
        }
        let update = TaskUpdate { estado: Some(next), asignado_a: None };
        run_mutation(
            message,
            move |api| async move { api.update_task(&task.id, &update).await },
            move |updated: Task| state.catalog.update(|c| c.upsert_task(updated)),
        );
    };

    let delete = move |id: String| {
        run_mutation(
            message,
            {
                let id = id.clone();
                move |api| async move { api.delete_task(&id).await }
            },
            move |()| state.catalog.update(|c| c.remove_task(&id)),
        );
    };

    let field = move |update: fn(&mut TaskForm, String)| {
        move |ev: leptos::ev::Event| form.update(|f| update(f, event_target_value(&ev)))
    };

    view! {
        <Shell active=PagePath::Tareas title="Tareas">
            <form class="entity-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Título"
                    prop:value=move || form.get().titulo
                    on:input=field(|f, v| f.titulo = v)
                />
                <input
                    type="text"
                    placeholder="Descripción"
                    prop:value=move || form.get().descripcion
                    on:input=field(|f, v| f.descripcion = v)
                />
                <select prop:value=move || form.get().prioridad on:change=field(|f, v| f.prioridad = v)>
                    <option value="">"Prioridad"</option>
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.key()>{p.label()}</option> })
                        .collect_view()}
                </select>
                <select prop:value=move || form.get().area_id on:change=field(|f, v| f.area_id = v)>
                    <option value="">"Sin área"</option>
                    {move || {
                        state
                            .catalog
                            .with(|c| c.areas.items().to_vec())
                            .into_iter()
                            .map(|a| view! { <option value=a.id>{a.nombre}</option> })
                            .collect_view()
                    }}
                </select>
                <select prop:value=move || form.get().asignado_a on:change=field(|f, v| f.asignado_a = v)>
                    <option value="">"Sin asignar"</option>
                    {move || {
                        state
                            .catalog
                            .with(|c| c.users.items().to_vec())
                            .into_iter()
                            .map(|u| view! { <option value=u.id>{u.nombre}</option> })
                            .collect_view()
                    }}
                </select>
                <input
                    type="date"
                    prop:value=move || form.get().fecha_limite
                    on:input=field(|f, v| f.fecha_limite = v)
                />
                <input
                    type="number"
                    min="0"
                    step="0.5"
                    placeholder="Horas estimadas"
                    prop:value=move || form.get().duracion_estimada
                    on:input=field(|f, v| f.duracion_estimada = v)
                />
                <button type="submit">"Crear tarea"</button>
            </form>
            <Show when=move || !message.get().is_empty()>
                <p class="error">{move || message.get()}</p>
            </Show>

            <div class="toolbar">
                <label>
                    "Estado: "
                    <select on:change=move |ev| filter.set(TaskStatus::from_key(&event_target_value(&ev)))>
                        <option value="">"Todos"</option>
                        {TaskStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <Show when=move || list_error().is_some()>
                <p class="error">{move || list_error().unwrap_or_default()}</p>
            </Show>

            <table class="entity-table">
                <thead>
                    <tr>
                        <th>"Título"</th>
                        <th>"Estado"</th>
                        <th>"Prioridad"</th>
                        <th>"Área"</th>
                        <th>"Responsable"</th>
                        <th>"Fecha límite"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let (areas, users) =
                            state.catalog.with(|c| (c.areas.items().to_vec(), c.users.items().to_vec()));
                        visible()
                            .into_iter()
                            .map(|task| {
                                let can_advance = task.estado.advance() != task.estado;
                                let for_advance = task.clone();
                                let id = task.id.clone();
                                view! {
                                    <tr>
                                        <td>{task.titulo.clone()}</td>
                                        <td>{task.estado.label()}</td>
                                        <td>{task.prioridad.label()}</td>
                                        <td>{area_name(&areas, task.area_id.as_deref())}</td>
                                        <td>{user_name(&users, task.asignado_a.as_deref())}</td>
                                        <td>{task.fecha_limite.clone().unwrap_or_default()}</td>
                                        <td class="row-actions">
                                            <button
                                                type="button"
                                                disabled=!can_advance
                                                on:click=move |_| advance(for_advance.clone())
                                            >
                                                "Avanzar"
                                            </button>
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
    view! { <TareasPage/> }.into_any()
}

pub fn init(scope: &PageScope) {
    super::load_catalog(scope, CatalogNeeds { tasks: true, areas: true, users: true });
}
