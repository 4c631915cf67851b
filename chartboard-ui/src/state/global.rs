//! Global Application State
//!
//! Owns the chart store and mirrors its dataset into a Leptos signal so
//! components re-render on every change.

use chartboard::persist::{attach_persistence, load_dataset, DEFAULT_KEY};
use chartboard::store::{Action, Change, ChartDataset, ChartStore};
use chartboard::Progress;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::local_storage::LocalStorage;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The chart store; written only through `dispatch`
    store: Rc<RefCell<ChartStore>>,
    /// Latest dataset, refreshed by a store subscription
    pub dataset: RwSignal<ChartDataset>,
    /// Index of the entry loaded into the edit form
    pub editing: RwSignal<Option<usize>>,
    /// Progress bar demo value
    pub progress: RwSignal<Progress>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Most recent store change, shown as a toast
    pub notice: RwSignal<Option<Notice>>,
}

/// A store change together with the label it touched
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub change: Change,
    /// Label of the added or updated entry
    pub label: Option<String>,
}

impl Notice {
    fn new(change: &Change, dataset: &ChartDataset) -> Self {
        let label = match *change {
            Change::Added { index } | Change::Updated { index } => {
                dataset.labels().get(index).cloned()
            }
            Change::Removed { .. } | Change::Reset => None,
        };
        Self {
            change: *change,
            label,
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let backend = LocalStorage;
    let mut store = ChartStore::with_dataset(load_dataset(&backend, DEFAULT_KEY));
    let dataset = create_rw_signal(store.dataset().clone());
    let notice = create_rw_signal(None);

    attach_persistence(&mut store, backend, DEFAULT_KEY);
    store.subscribe(move |change, ds| {
        dataset.set(ds.clone());

        let current = Notice::new(change, ds);
        notice.set(Some(current.clone()));
        // A newer notice keeps its own timer
        gloo_timers::callback::Timeout::new(3000, move || {
            if notice.get_untracked().as_ref() == Some(&current) {
                notice.set(None);
            }
        })
        .forget();
    });

    web_sys::console::log_1(&format!("Loaded {} chart entries", store.count()).into());

    let state = GlobalState {
        store: Rc::new(RefCell::new(store)),
        dataset,
        editing: create_rw_signal(None),
        progress: create_rw_signal(Progress::new(50.0, 100.0)),
        error: create_rw_signal(None),
        notice,
    };

    provide_context(state);
}

impl GlobalState {
    /// Apply an action to the store. Returns false and shows an error on failure.
    pub fn dispatch(&self, action: Action) -> bool {
        let result = self.store.borrow_mut().dispatch(action);
        match result {
            Ok(()) => true,
            Err(e) => {
                web_sys::console::error_1(&format!("Store action failed: {}", e).into());
                self.show_error(&e.to_string());
                false
            }
        }
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
