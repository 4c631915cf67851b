//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod pie_chart;
pub mod progress_bar_demo;

pub use home::Home;
pub use pie_chart::PieChartPage;
pub use progress_bar_demo::ProgressBarDemo;
