use crate::shared::numeric::lenient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesTotals {
    #[serde(default)]
    pub orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default)]
    pub customers: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub aov: f64,
    #[serde(default)]
    pub units: u64,
}

/// Percent change per metric; `None` when the previous period was empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesChanges {
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub orders: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub customers: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub aov: Option<f64>,
}

/// `/sales/overview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverview {
    pub period: DateRange,
    pub current: SalesTotals,
    pub previous: SalesTotals,
    pub changes: SalesChanges,
}

/// `/sales/by-channel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesByChannel {
    pub channel: String,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default)]
    pub customers: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub aov: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
}

/// `/sales/by-period` bucket. `period` is the bucket start as an ISO string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesByPeriod {
    pub period: String,
    #[serde(default)]
    pub orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default)]
    pub customers: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub aov: f64,
}

/// `/sales/funnel` stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub conversion_rate: Option<f64>,
}

/// `/sales/heatmap` cell. `day_of_week` follows the SQL convention (0 = Sunday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub day_of_week: u8,
    pub hour: u8,
    #[serde(default)]
    pub orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonWindow {
    #[serde(default)]
    pub orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default)]
    pub customers: u64,
}

/// `/sales/comparison`: keyed by window name (`today`, `yesterday`,
/// `last_7_days`, `last_30_days`, `this_month`, `last_month`).
pub type PeriodComparison = HashMap<String, ComparisonWindow>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_with_missing_changes() {
        let json = r#"{
            "period": {"start": "2024-02-15", "end": "2024-03-15"},
            "current": {"orders": 10, "revenue": 1000.0, "customers": 8, "aov": 100.0, "units": 14},
            "previous": {"orders": 0, "revenue": 0, "customers": 0, "aov": 0},
            "changes": {"orders": null, "revenue": null, "customers": null, "aov": null}
        }"#;
        let overview: SalesOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.current.units, 14);
        assert_eq!(overview.previous.units, 0);
        assert_eq!(overview.changes.revenue, None);
    }

    #[test]
    fn test_comparison_is_keyed_by_window() {
        let json = r#"{"today": {"orders": 3, "revenue": "300.5", "customers": 3}}"#;
        let comparison: PeriodComparison = serde_json::from_str(json).unwrap();
        assert_eq!(comparison["today"].revenue, 300.5);
    }
}
