pub mod api_utils;
pub mod chart;
pub mod colors;
pub mod components;
pub mod date_utils;
pub mod formatters;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod query;
pub mod viewport;
