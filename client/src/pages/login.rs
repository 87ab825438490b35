//! Login page: email + password against the backend auth endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public route. On success the session flag and token are stored
//! and the user is sent to the dashboard; the router takes it from there.
//! If the session cannot be stored the user stays here with a message, since
//! the router would only bounce them back.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::router::{PagePath, PageScope};
use crate::session::SessionStore;
use crate::state::AppState;
use crate::util::validation::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login(&email.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Iniciando sesión...".to_owned());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::net::api::ApiError;
            use crate::router::go;
            use crate::session::LocalSession;

            match super::api().login(&email_value, &password_value).await {
                Ok(resp) => {
                    if let Err(message) = complete_sign_in(&LocalSession, resp.token.as_deref(), go) {
                        info.set(message);
                        busy.set(false);
                        return;
                    }
                    log::info!("signed in as {email_value}");
                }
                Err(ApiError::Unauthorized) => {
                    info.set("Correo o contraseña incorrectos.".to_owned());
                    busy.set(false);
                }
                Err(e) => {
                    info.set(format!("No se pudo iniciar sesión: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Processmart"</h1>
                <p class="login-card__subtitle">"Gestión de procesos"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="correo@empresa.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Ingresar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Store the session and leave for the dashboard. On a storage failure the
/// user-facing message is returned and no navigation happens.
pub fn complete_sign_in(
    session: &impl SessionStore,
    token: Option<&str>,
    navigate: impl FnOnce(PagePath),
) -> Result<(), String> {
    if let Err(e) = session.sign_in(token) {
        log::warn!("session not persisted: {e}");
        return Err(
            "No se pudo guardar la sesión en este navegador. Revisa que el almacenamiento local esté habilitado."
                .to_owned(),
        );
    }
    navigate(PagePath::Dashboard);
    Ok(())
}

pub fn render() -> AnyView {
    view! { <LoginPage/> }.into_any()
}

/// Reaching the login page means there is no session; drop anything cached
/// for the previous one.
pub fn init(_scope: &PageScope) {
    if let Some(state) = use_context::<AppState>() {
        state.clear();
    }
}
