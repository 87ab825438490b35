//! Assignee recommendation for a single task.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::inference::{InferenceKind, InferencePage, init_for};
use crate::router::PageScope;

pub fn render() -> AnyView {
    view! { <InferencePage kind=InferenceKind::Recomendacion/> }.into_any()
}

pub fn init(scope: &PageScope) {
    init_for(InferenceKind::Recomendacion, scope);
}
