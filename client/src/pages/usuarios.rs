//! User catalog: list, create, delete.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::{CatalogNeeds, run_mutation};
use crate::components::shell::Shell;
use crate::net::types::User;
use crate::router::{PagePath, PageScope};
use crate::state::AppState;
use crate::util::task_summary::area_name;
use crate::util::validation::{UserForm, validate_user};

#[component]
pub fn UsuariosPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let form = RwSignal::new(UserForm::default());
    let message = RwSignal::new(String::new());

    let list_error = move || state.catalog.with(|c| c.users.error().map(str::to_owned));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = match validate_user(&form.get()) {
            Ok(user) => user,
            Err(msg) => {
                message.set(msg.to_owned());
                return;
            }
        };
        message.set(String::new());
        run_mutation(
            message,
            move |api| async move { api.create_user(&user).await },
            move |created: User| {
                state.catalog.update(|c| c.upsert_user(created));
                form.set(UserForm::default());
            },
        );
    };

    let delete = move |id: String| {
        run_mutation(
            message,
            {
                let id = id.clone();
                move |api| async move { api.delete_user(&id).await }
            },
            move |()| state.catalog.update(|c| c.remove_user(&id)),
        );
    };

    let field = move |update: fn(&mut UserForm, String)| {
        move |ev: leptos::ev::Event| form.update(|f| update(f, event_target_value(&ev)))
    };

    view! {
        <Shell active=PagePath::Usuarios title="Usuarios">
            <form class="entity-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Nombre"
                    prop:value=move || form.get().nombre
                    on:input=field(|f, v| f.nombre = v)
                />
                <input
                    type="email"
                    placeholder="Correo"
                    prop:value=move || form.get().email
                    on:input=field(|f, v| f.email = v)
                />
                <input
                    type="text"
                    placeholder="Rol"
                    prop:value=move || form.get().rol
                    on:input=field(|f, v| f.rol = v)
                />
                <input
                    type="password"
                    placeholder="Contraseña"
                    prop:value=move || form.get().password
                    on:input=field(|f, v| f.password = v)
                />
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
                <button type="submit">"Crear usuario"</button>
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
                        <th>"Correo"</th>
                        <th>"Rol"</th>
                        <th>"Área"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let (users, areas) =
                            state.catalog.with(|c| (c.users.items().to_vec(), c.areas.items().to_vec()));
                        users
                            .into_iter()
                            .map(|user| {
                                let id = user.id.clone();
                                let area = area_name(&areas, user.area_id.as_deref());
                                view! {
                                    <tr>
                                        <td>{user.nombre}</td>
                                        <td>{user.email}</td>
                                        <td>{user.rol}</td>
                                        <td>{area}</td>
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
    view! { <UsuariosPage/> }.into_any()
}

pub fn init(scope: &PageScope) {
    super::load_catalog(scope, CatalogNeeds { users: true, areas: true, tasks: false });
}
