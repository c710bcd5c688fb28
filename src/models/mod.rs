// Aggregated pipeline output consumed by the UI
pub mod dashboard;

pub use dashboard::DashboardModel;
