//! Progress Bar Component

use chartboard::Progress;
use leptos::*;

/// Horizontal progress bar with a percentage label
#[component]
pub fn ProgressBar(
    #[prop(into)]
    progress: Signal<Progress>,
    #[prop(default = "bg-blue-600")]
    bar_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="w-full">
            <div class="w-full h-6 bg-gray-700 rounded-full overflow-hidden">
                <div
                    class=move || {
                        let done = if progress.get().is_complete() { "bg-green-600" } else { bar_class };
                        format!("h-full {} transition-all duration-300", done)
                    }
                    style=move || format!("width: {:.2}%", progress.get().percent())
                />
            </div>
            <div class="flex justify-between text-sm text-gray-400 mt-2">
                <span>{move || progress.get().label()}</span>
                <span>{move || format!("{:.0} / {:.0}", progress.get().value(), progress.get().max())}</span>
            </div>
        </div>
    }
}
