//! Shared reactive application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are torn down on every navigation, but the backend catalogs they show
//! are shared. [`AppState`] is created once under the root owner and provided
//! as context to every mounted page, so lists fetched by one page are visible
//! to the next while it refreshes them.
//!
//! The plain state structs (`catalog`, `inference`) carry no signals and are
//! tested natively; `AppState` only wraps them in `RwSignal`s.

pub mod catalog;
pub mod inference;

use leptos::prelude::*;

use catalog::{CatalogState, Loadable};
use crate::net::types::InferenceResult;

#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub catalog: RwSignal<CatalogState>,
    /// Last bottleneck analysis shown by the processes page.
    pub bottlenecks: RwSignal<Loadable<InferenceResult>>,
}

impl AppState {
    /// Create the signals. Call once, under an owner that outlives every page.
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(CatalogState::default()),
            bottlenecks: RwSignal::new(Loadable::Idle),
        }
    }

    /// Forget everything fetched for the previous session.
    pub fn clear(&self) {
        self.catalog.set(CatalogState::default());
        self.bottlenecks.set(Loadable::Idle);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
