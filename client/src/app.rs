//! Browser entry point: logging, shared state, and router wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the WASM module loads. Builds the route table, mounts the
//! router on `#app` (falling back to `<body>`), subscribes it to
//! `hashchange`, and runs the initial resolution for whatever fragment the
//! page was opened with.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::pages;
use crate::router::{DomMount, HashLocation, Router, RouterHandle};
use crate::session::LocalSession;
use crate::state::AppState;

const CONTAINER_ID: &str = "app";

fn container(document: &web_sys::Document) -> Option<web_sys::HtmlElement> {
    document
        .get_element_by_id(CONTAINER_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body())
}

pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let _ = leptos::task::Executor::init_wasm_bindgen();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(target) = window.document().as_ref().and_then(container) else {
        log::error!("no mount container found");
        return;
    };
    let table = match pages::registry() {
        Ok(table) => table,
        Err(e) => {
            log::error!("invalid route table: {e}");
            return;
        }
    };

    // Shared state lives for the whole session, independent of any page.
    let root = Owner::new();
    let state = root.with(AppState::new);
    std::mem::forget(root);

    let router = Router::new(table, LocalSession, HashLocation, DomMount::new(target, state));
    let handle = RouterHandle::new(router);

    let on_change = {
        let handle = handle.clone();
        Closure::<dyn FnMut()>::new(move || {
            handle.notify();
        })
    };
    if let Err(e) = window.add_event_listener_with_callback("hashchange", on_change.as_ref().unchecked_ref()) {
        log::error!("failed to subscribe to hashchange: {e:?}");
        return;
    }
    on_change.forget();

    for outcome in handle.notify() {
        log::debug!("initial route: {outcome:?}");
    }
}
