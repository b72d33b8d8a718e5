mod customer_detail;
mod customer_list;
mod dashboard;

pub use dashboard::CustomersDashboard;
