//! SVG / CSS charts. Geometry lives in [`crate::shared::chart`]; these
//! components only lay it out.

pub mod area_chart;
pub mod bar_chart;
pub mod donut_chart;

pub use area_chart::{AreaChart, AreaChartData, AreaSeries, ConfidenceBand};
pub use bar_chart::{BarChart, BarOrientation};
pub use donut_chart::DonutChart;
