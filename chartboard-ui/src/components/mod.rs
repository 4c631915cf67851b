//! UI Components
//!
//! Reusable Leptos components for the demo pages.

pub mod nav;
pub mod pie_chart;
pub mod entry_form;
pub mod entry_list;
pub mod progress_bar;
pub mod toast;

pub use nav::Nav;
pub use pie_chart::PieChart;
pub use entry_form::EntryForm;
pub use entry_list::EntryList;
pub use progress_bar::ProgressBar;
pub use toast::Toast;
