//! Pie Chart Page
//!
//! Chart, entry form and entry list.

use leptos::*;

use crate::components::{EntryForm, EntryList, PieChart};
use crate::state::global::GlobalState;

/// Pie chart page component
#[component]
pub fn PieChartPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let editing = state.editing;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Pie Chart"</h1>
                <p class="text-gray-400 mt-1">"Entries are saved automatically"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <PieChart />
            </section>

            <div class="grid md:grid-cols-2 gap-6">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">
                        {move || match editing.get() {
                            Some(index) => format!("Edit Entry #{}", index + 1),
                            None => "New Entry".to_string(),
                        }}
                    </h2>
                    <EntryForm />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Entries"</h2>
                    <EntryList />
                </section>
            </div>
        </div>
    }
}
