//! Reusable UI components

pub mod header;
pub mod loading;
pub mod query_panel;
pub mod results_panel;

pub use header::Header;
pub use loading::{LoadingSpinner, ResearchProgress};
pub use query_panel::QueryPanel;
pub use results_panel::ResultsPanel;
