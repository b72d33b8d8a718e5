mod dashboard;

pub use dashboard::PredictionsDashboard;
