//! App Root Component
//!
//! Main application component with routing and global providers.

use chartboard::Route as AppRoute;
use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Home, PieChartPage, ProgressBarDemo};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                <Nav />

                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path=AppRoute::Home.path() view=Home />
                        <Route path=AppRoute::ProgressBarDemo.path() view=ProgressBarDemo />
                        <Route path=AppRoute::PieChart.path() view=PieChartPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing how many entries are saved
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"Saved in this browser"</span>
                <span>
                    {move || match state.dataset.get().len() {
                        1 => "1 entry".to_string(),
                        n => format!("{} entries", n),
                    }}
                </span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=AppRoute::Home.path()
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
