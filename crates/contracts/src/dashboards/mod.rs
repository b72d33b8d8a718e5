pub mod d100_overview;
pub mod d101_sales;
pub mod d102_customers;
pub mod d103_products;
pub mod d104_marketing;
pub mod d105_predictions;
