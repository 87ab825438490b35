//! Performance analysis for a single user.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::inference::{InferenceKind, InferencePage, init_for};
use crate::router::PageScope;

pub fn render() -> AnyView {
    view! { <InferencePage kind=InferenceKind::Rendimiento/> }.into_any()
}

pub fn init(scope: &PageScope) {
    init_for(InferenceKind::Rendimiento, scope);
}
