//! Toast Component
//!
//! Reports the latest chart change and any failed action.

use chartboard::store::Change;
use leptos::*;

use crate::state::global::{GlobalState, Notice};

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let notice = state.notice;
    let error = state.error;

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || notice.get().map(|n| {
                let accent = match n.change {
                    Change::Added { .. } => "bg-green-600",
                    Change::Updated { .. } => "bg-blue-600",
                    Change::Removed { .. } | Change::Reset => "bg-gray-600",
                };
                view! {
                    <div class=format!("{} text-white px-4 py-3 rounded-lg shadow-lg text-sm", accent)>
                        {notice_text(&n)}
                    </div>
                }
            })}

            {move || error.get().map(|message| view! {
                <div class="flex items-center justify-between space-x-4 bg-red-600 text-white px-4 py-3 rounded-lg shadow-lg text-sm">
                    <span>{message}</span>
                    <button on:click=move |_| error.set(None) class="font-bold">"×"</button>
                </div>
            })}
        </div>
    }
}

/// Toast text for a store change, with 1-based slice numbers
fn notice_text(notice: &Notice) -> String {
    let label = notice.label.as_deref().unwrap_or("entry");
    match notice.change {
        Change::Added { index } => format!("Added \"{}\" as slice {}", label, index + 1),
        Change::Updated { index } => format!("Slice {} is now \"{}\"", index + 1, label),
        Change::Removed { index } => format!("Removed slice {}", index + 1),
        Change::Reset => "Chart cleared".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(change: Change, label: Option<&str>) -> Notice {
        Notice {
            change,
            label: label.map(str::to_string),
        }
    }

    #[test]
    fn test_notice_text() {
        assert_eq!(
            notice_text(&notice(Change::Added { index: 0 }, Some("Rent"))),
            "Added \"Rent\" as slice 1"
        );
        assert_eq!(
            notice_text(&notice(Change::Updated { index: 2 }, Some("Food"))),
            "Slice 3 is now \"Food\""
        );
        assert_eq!(notice_text(&notice(Change::Removed { index: 1 }, None)), "Removed slice 2");
        assert_eq!(notice_text(&notice(Change::Reset, None)), "Chart cleared");
    }
}
