//! Entry List Component
//!
//! Table of chart entries with edit and remove actions.

use chartboard::store::Action;
use leptos::*;

use crate::state::global::GlobalState;

/// Entry list component
#[component]
pub fn EntryList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_rows = state.clone();
    let state_for_reset = state.clone();
    let on_reset = move |_| {
        if state_for_reset.dispatch(Action::Reset) {
            state_for_reset.editing.set(None);
        }
    };

    let dataset = state.dataset;

    view! {
        <div class="space-y-4">
            {move || {
                let ds = dataset.get();
                if ds.is_empty() {
                    return view! {
                        <p class="text-gray-400">"No entries yet. Add one to start the chart."</p>
                    }.into_view();
                }

                ds.entries()
                    .enumerate()
                    .map(|(index, entry)| view! {
                        <EntryRow
                            index=index
                            label=entry.label
                            value=entry.value
                            color=entry.color
                            state=state_for_rows.clone()
                        />
                    })
                    .collect_view()
            }}

            <button
                on:click=on_reset
                disabled=move || dataset.get().is_empty()
                class="px-4 py-2 bg-red-700 hover:bg-red-800 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg text-sm font-medium transition-colors"
            >
                "Reset Chart"
            </button>
        </div>
    }
}

#[component]
fn EntryRow(
    index: usize,
    #[prop(into)]
    label: String,
    value: f64,
    #[prop(into)]
    color: String,
    state: GlobalState,
) -> impl IntoView {
    let state_for_edit = state.clone();
    let on_edit = move |_| state_for_edit.editing.set(Some(index));

    let on_remove = move |_| {
        if state.dispatch(Action::Remove { index }) {
            // Indices shift down after a removal
            state.editing.update(|editing| {
                *editing = match *editing {
                    Some(i) if i == index => None,
                    Some(i) if i > index => Some(i - 1),
                    other => other,
                };
            });
        }
    };

    view! {
        <div class="flex items-center justify-between bg-gray-700 rounded-lg px-4 py-3">
            <div class="flex items-center space-x-3">
                <span
                    class="w-4 h-4 rounded-full"
                    style=format!("background-color: {}", color)
                />
                <span class="font-medium">{label}</span>
                <span class="text-gray-400">{value}</span>
            </div>

            <div class="flex space-x-2">
                <button
                    on:click=on_edit
                    class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded text-sm transition-colors"
                >
                    "Edit"
                </button>
                <button
                    on:click=on_remove
                    class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm transition-colors"
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}
