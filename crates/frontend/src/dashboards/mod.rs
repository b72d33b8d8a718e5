pub mod d100_overview;
pub mod d101_sales;
pub mod d102_customers;
pub mod d103_products;
pub mod d104_marketing;
pub mod d105_predictions;

pub use d100_overview::ui::OverviewDashboard;
pub use d101_sales::ui::SalesDashboard;
pub use d102_customers::ui::CustomersDashboard;
pub use d103_products::ui::ProductsDashboard;
pub use d104_marketing::ui::MarketingDashboard;
pub use d105_predictions::ui::PredictionsDashboard;
