//! Key/value listing of an opaque inference result.

use leptos::prelude::*;

use crate::net::types::InferenceResult;
use crate::util::result_view::flatten_result;

#[component]
pub fn ResultTable(#[prop(into)] result: Signal<Option<InferenceResult>>) -> impl IntoView {
    let rows = move || result.with(|r| r.as_ref().map(flatten_result).unwrap_or_default());

    view! {
        <Show when=move || result.with(Option::is_some)>
            <table class="result-table">
                <tbody>
                    {move || {
                        rows()
                            .into_iter()
                            .map(|(key, value)| {
                                view! {
                                    <tr>
                                        <th>{key}</th>
                                        <td>{value}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
