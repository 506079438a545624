pub mod dashboard;

pub use dashboard::StatisticsDashboard;
