//! Entry Form Component
//!
//! Adds a pie chart entry, or edits the one selected in the entry list.

use chartboard::store::{Action, ChartEntry};
use leptos::*;

use crate::state::global::GlobalState;

/// Colors offered for new entries
const PALETTE: [&str; 6] = [
    "#ff6384", // Red
    "#36a2eb", // Blue
    "#ffce56", // Yellow
    "#4bc0c0", // Teal
    "#9966ff", // Purple
    "#ff9f40", // Orange
];

/// Entry form component
#[component]
pub fn EntryForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (label, set_label) = create_signal(String::new());
    let (value, set_value) = create_signal(String::new());
    let (color, set_color) = create_signal(PALETTE[0].to_string());

    // Load the entry being edited into the form
    let state_for_effect = state.clone();
    create_effect(move |_| {
        if let Some(index) = state_for_effect.editing.get() {
            if let Some(entry) = state_for_effect.dataset.get_untracked().get(index) {
                set_label.set(entry.label);
                set_value.set(entry.value.to_string());
                set_color.set(entry.color);
            }
        }
    });

    let clear_form = move || {
        set_label.set(String::new());
        set_value.set(String::new());
    };

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let entry = match parse_entry(&label.get(), &value.get(), &color.get()) {
            Ok(entry) => entry,
            Err(message) => {
                state_for_submit.show_error(message);
                return;
            }
        };

        let editing = state_for_submit.editing.get_untracked();
        let action = match editing {
            Some(index) => Action::Update { index, entry },
            None => Action::Add(entry),
        };

        if state_for_submit.dispatch(action) {
            state_for_submit.editing.set(None);
            clear_form();
            let next = state_for_submit.dataset.get_untracked().len();
            set_color.set(PALETTE[next % PALETTE.len()].to_string());
        }
    };

    let state_for_cancel = state.clone();
    let on_cancel = move |_| {
        state_for_cancel.editing.set(None);
        clear_form();
    };

    let editing = state.editing;

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Label"</label>
                <input
                    type="text"
                    placeholder="e.g. Rent"
                    prop:value=move || label.get()
                    on:input=move |ev| set_label.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-blue-500 focus:outline-none"
                />
            </div>

            <div class="flex space-x-4">
                <div class="flex-1">
                    <label class="block text-sm text-gray-400 mb-2">"Value"</label>
                    <input
                        type="number"
                        step="any"
                        prop:value=move || value.get()
                        on:input=move |ev| set_value.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                               border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Color"</label>
                    <input
                        type="color"
                        prop:value=move || color.get()
                        on:input=move |ev| set_color.set(event_target_value(&ev))
                        class="h-12 w-16 bg-gray-700 rounded-lg border border-gray-600"
                    />
                </div>
            </div>

            <div class="flex space-x-2">
                <button
                    type="submit"
                    class="flex-1 bg-blue-600 hover:bg-blue-700 rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if editing.get().is_some() { "Save Changes" } else { "Add Entry" }}
                </button>

                {move || editing.get().map(|_| view! {
                    <button
                        type="button"
                        on:click=on_cancel.clone()
                        class="px-4 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                    >
                        "Cancel"
                    </button>
                })}
            </div>
        </form>
    }
}

/// Validate form input into an entry
fn parse_entry(label: &str, value: &str, color: &str) -> Result<ChartEntry, &'static str> {
    let label = label.trim();
    if label.is_empty() {
        return Err("Label is required");
    }

    let value: f64 = value.trim().parse().map_err(|_| "Value must be a number")?;
    if !value.is_finite() || value < 0.0 {
        return Err("Value must be zero or more");
    }

    Ok(ChartEntry::new(label, value, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        let entry = parse_entry("  Rent ", "1200.5", "#ff6384").unwrap();
        assert_eq!(entry, ChartEntry::new("Rent", 1200.5, "#ff6384"));
    }

    #[test]
    fn test_parse_entry_rejects_bad_input() {
        assert_eq!(parse_entry("", "1", "#000000"), Err("Label is required"));
        assert_eq!(parse_entry("A", "abc", "#000000"), Err("Value must be a number"));
        assert_eq!(parse_entry("A", "-3", "#000000"), Err("Value must be zero or more"));
        assert_eq!(parse_entry("A", "inf", "#000000"), Err("Value must be zero or more"));
    }
}
