pub mod api;
pub mod projections;
pub mod ui;
