//! Authenticated page frame: sidebar navigation, header, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navigation entries are plain `#fragment` links, so the browser's
//! `hashchange` drives routing exactly as a typed URL would. Logout clears the
//! session and cached catalogs before returning to the login page.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

use crate::router::{PagePath, go};
use crate::session::{LocalSession, SessionStore};
use crate::state::AppState;

/// Sidebar entries in display order.
pub const NAV_ITEMS: [(PagePath, &str); 9] = [
    (PagePath::Dashboard, "Panel"),
    (PagePath::Tareas, "Tareas"),
    (PagePath::Areas, "Áreas"),
    (PagePath::Usuarios, "Usuarios"),
    (PagePath::Riesgo, "Riesgo"),
    (PagePath::Duracion, "Duración"),
    (PagePath::Recomendacion, "Recomendación"),
    (PagePath::Rendimiento, "Rendimiento"),
    (PagePath::Procesos, "Procesos"),
];

pub fn nav_href(path: PagePath) -> String {
    format!("#{path}")
}

pub fn nav_class(active: PagePath, item: PagePath) -> &'static str {
    if active == item { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

#[component]
pub fn Shell(active: PagePath, title: &'static str, children: Children) -> impl IntoView {
    let state = expect_context::<AppState>();

    let on_logout = move |_| {
        LocalSession.sign_out();
        state.clear();
        log::info!("signed out");
        go(PagePath::Login);
    };

    view! {
        <div class="shell">
            <nav class="sidebar">
                <div class="sidebar__brand">"Processmart"</div>
                <ul class="sidebar__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, label)| {
                            view! {
                                <li>
                                    <a class=nav_class(active, path) href=nav_href(path)>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button class="sidebar__logout" type="button" on:click=on_logout>
                    "Cerrar sesión"
                </button>
            </nav>
            <main class="shell__content">
                <h1 class="shell__title">{title}</h1>
                {children()}
            </main>
        </div>
    }
}
