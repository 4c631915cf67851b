//! Home Page
//!
//! Landing page linking to both demos.

use chartboard::Route;
use leptos::*;
use leptos_router::A;

use crate::components::ProgressBar;
use crate::state::global::GlobalState;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dataset = state.dataset;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Chartboard"</h1>
                <p class="text-gray-400 mt-1">"A pie chart and a progress bar, saved in your browser"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <DemoCard
                    href=Route::PieChart.path()
                    title="Pie Chart"
                    description="Add, edit and remove labelled slices."
                >
                    <p class="text-sm text-gray-400">
                        {move || format!("{} entries saved", dataset.get().len())}
                    </p>
                </DemoCard>

                <DemoCard
                    href=Route::ProgressBarDemo.path()
                    title="Progress Bar"
                    description="Drive a progress bar by hand or let it run."
                >
                    <ProgressBar progress=state.progress />
                </DemoCard>
            </div>
        </div>
    }
}

#[component]
fn DemoCard(
    href: &'static str,
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <A href=href class="block bg-gray-800 hover:bg-gray-700 rounded-xl p-6 transition-colors space-y-4">
            <h2 class="text-xl font-semibold">{title}</h2>
            <p class="text-gray-300">{description}</p>
            {children()}
        </A>
    }
}
