//! Page modules for routed screens.
//!
//! ARCHITECTURE
//! ============
//! Each page module exposes a `render` function (the route's markup, mounted
//! fresh on every visit) and an optional `init` (runs once after mounting and
//! starts the fetches that populate the page). [`registry`] wires them into
//! the route table.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures become visible messages on the page. A 401 additionally
//! ends the session and sends the user to `login`. Responses that arrive after
//! the user navigated away are dropped via the page's cancel token.

pub mod areas;
pub mod dashboard;
pub mod duracion;
pub mod inference;
pub mod login;
pub mod procesos;
pub mod recomendacion;
pub mod rendimiento;
pub mod riesgo;
pub mod tareas;
pub mod usuarios;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyView;

use crate::config::ClientConfig;
use crate::net::api::{Api, ApiError};
use crate::router::{PagePath, PageScope, RouteDefinition, RouteTable, RouterError};
use crate::session::{LocalSession, SessionStore};
use crate::state::AppState;
use crate::state::catalog::Loadable;

/// Build the application route table.
///
/// # Errors
///
/// Propagates [`RouterError`] from table validation.
pub fn registry() -> Result<RouteTable<AnyView>, RouterError> {
    RouteTable::new(vec![
        RouteDefinition::public(PagePath::Login, login::render).with_init(login::init),
        RouteDefinition::protected(PagePath::Dashboard, dashboard::render).with_init(dashboard::init),
        RouteDefinition::protected(PagePath::Tareas, tareas::render).with_init(tareas::init),
        RouteDefinition::protected(PagePath::Areas, areas::render).with_init(areas::init),
        RouteDefinition::protected(PagePath::Usuarios, usuarios::render).with_init(usuarios::init),
        RouteDefinition::protected(PagePath::Riesgo, riesgo::render).with_init(riesgo::init),
        RouteDefinition::protected(PagePath::Duracion, duracion::render).with_init(duracion::init),
        RouteDefinition::protected(PagePath::Recomendacion, recomendacion::render).with_init(recomendacion::init),
        RouteDefinition::protected(PagePath::Rendimiento, rendimiento::render).with_init(rendimiento::init),
        RouteDefinition::protected(PagePath::Procesos, procesos::render).with_init(procesos::init),
    ])
}

/// User-facing message for a failed call. A 401 also ends the session and
/// navigates to `login`.
pub fn failure_message(err: &ApiError, session: &impl SessionStore, navigate: impl FnOnce(&str)) -> String {
    if *err == ApiError::Unauthorized {
        session.sign_out();
        navigate(PagePath::Login.as_str());
        return "La sesión expiró. Inicia sesión de nuevo.".to_owned();
    }
    format!("No se pudo completar la operación: {err}")
}

/// Store a fetch result for the page that started it.
///
/// Returns `false` when the caller should stop issuing follow-up requests:
/// the page is gone (nothing is stored) or the session just expired.
pub fn settle<T>(
    scope: &PageScope,
    session: &impl SessionStore,
    result: Result<T, ApiError>,
    store: impl FnOnce(Loadable<T>),
) -> bool {
    if scope.is_cancelled() {
        log::debug!("dropping response for a page that is no longer mounted");
        return false;
    }
    match result {
        Ok(value) => {
            store(Loadable::Ready(value));
            true
        }
        Err(e) => {
            let expired = e == ApiError::Unauthorized;
            store(Loadable::Failed(failure_message(&e, session, |path| scope.navigate(path))));
            !expired
        }
    }
}

/// Catalog lists a page displays.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct CatalogNeeds {
    pub tasks: bool,
    pub areas: bool,
    pub users: bool,
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn api() -> Api {
    Api::from_session(&ClientConfig::from_build_env(), &LocalSession)
}

/// Refresh the catalogs a page needs. Items already loaded stay visible until
/// the new lists arrive.
pub(crate) fn load_catalog(scope: &PageScope, needs: CatalogNeeds) {
    let Some(state) = use_context::<AppState>() else {
        log::warn!("app state missing; catalog not loaded");
        return;
    };
    state.catalog.update(|c| {
        if needs.tasks {
            c.tasks.begin_refresh();
        }
        if needs.areas {
            c.areas.begin_refresh();
        }
        if needs.users {
            c.users.begin_refresh();
        }
    });

    #[cfg(feature = "csr")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let api = api();
            if needs.tasks {
                let result = api.list_tasks().await;
                if !settle(&scope, &LocalSession, result, |v| state.catalog.update(|c| c.tasks = v)) {
                    return;
                }
            }
            if needs.areas {
                let result = api.list_areas().await;
                if !settle(&scope, &LocalSession, result, |v| state.catalog.update(|c| c.areas = v)) {
                    return;
                }
            }
            if needs.users {
                let result = api.list_users().await;
                settle(&scope, &LocalSession, result, |v| state.catalog.update(|c| c.users = v));
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = scope;
}

/// Run a backend mutation from an event handler. Failures are written to
/// `message`; success hands the response to `apply`.
pub(crate) fn run_mutation<T, Fut>(
    message: RwSignal<String>,
    call: impl FnOnce(Api) -> Fut + 'static,
    apply: impl FnOnce(T) + 'static,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match call(api()).await {
            Ok(value) => apply(value),
            Err(e) => message.set(failure_message(&e, &LocalSession, |_| crate::router::go(PagePath::Login))),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (message, call, apply);
    }
}
