//! Progress Bar Demo Page
//!
//! Manual controls plus an animation that runs the bar to completion.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::components::ProgressBar;
use crate::state::global::GlobalState;

/// Animation tick, in milliseconds
const TICK_MS: u32 = 100;

/// Amount added per animation tick
const TICK_STEP: f64 = 1.0;

/// Progress bar demo page component
#[component]
pub fn ProgressBarDemo() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let progress = state.progress;

    let ticker = store_value(None::<Interval>);
    let running = create_rw_signal(false);

    let stop = move || {
        ticker.set_value(None);
        running.set(false);
    };

    let start = move |_| {
        if progress.get_untracked().is_complete() {
            progress.update(|p| p.set(0.0));
        }
        // The interval idles once complete; it is dropped by Stop or the next Run
        let interval = Interval::new(TICK_MS, move || {
            if !running.get_untracked() {
                return;
            }
            progress.update(|p| p.step(TICK_STEP));
            if progress.get_untracked().is_complete() {
                running.set(false);
            }
        });
        ticker.set_value(Some(interval));
        running.set(true);
    };

    on_cleanup(move || {
        ticker.try_update_value(|t| t.take());
    });

    let nudge = move |delta: f64| progress.update(|p| p.step(delta));

    view! {
        <div class="space-y-8 max-w-2xl">
            <div>
                <h1 class="text-3xl font-bold">"Progress Bar"</h1>
                <p class="text-gray-400 mt-1">"Drag the slider or let it run"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                <ProgressBar progress=progress />

                <input
                    type="range"
                    min="0"
                    max=move || progress.get().max()
                    step="1"
                    prop:value=move || progress.get().value().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            stop();
                            progress.update(|p| p.set(v));
                        }
                    }
                    class="w-full"
                />

                <div class="flex flex-wrap gap-2">
                    <button
                        on:click=move |_| nudge(-10.0)
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                    >
                        "-10"
                    </button>
                    <button
                        on:click=move |_| nudge(10.0)
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                    >
                        "+10"
                    </button>
                    <button
                        on:click=move |_| {
                            stop();
                            progress.update(|p| p.set(0.0));
                        }
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                    >
                        "Reset"
                    </button>
                    {move || if running.get() {
                        view! {
                            <button
                                on:click=move |_| stop()
                                class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm font-medium transition-colors"
                            >
                                "Stop"
                            </button>
                        }.into_view()
                    } else {
                        view! {
                            <button
                                on:click=start
                                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg text-sm font-medium transition-colors"
                            >
                                "Run"
                            </button>
                        }.into_view()
                    }}
                </div>
            </section>
        </div>
    }
}
