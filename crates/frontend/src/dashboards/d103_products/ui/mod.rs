mod dashboard;
mod product_detail;
mod product_list;

pub use dashboard::ProductsDashboard;
