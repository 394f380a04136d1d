//! Top-level views

mod dashboard;
mod forums;

pub use dashboard::DashboardView;
pub use forums::ForumsView;
