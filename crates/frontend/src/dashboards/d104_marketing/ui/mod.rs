mod dashboard;

pub use dashboard::MarketingDashboard;
