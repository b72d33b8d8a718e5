use crate::shared::numeric::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline metrics for the selected period (`/dashboard/kpis`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_customers: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_order_value: f64,
    #[serde(default)]
    pub new_customers: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub repeat_rate: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_ad_spend: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub roas: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub cac: Option<f64>,
    /// Change vs previous period, in percent.
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub revenue_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub orders_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub customers_change: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub aov_change: Option<f64>,
}

/// One day of the revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
    #[serde(default)]
    pub customers: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: i64,
    pub product_name: String,
    pub category: Option<String>,
    #[serde(default)]
    pub units_sold: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopChannel {
    pub channel: String,
    #[serde(default)]
    pub orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Danger,
    Warning,
    Info,
}

impl AlertKind {
    /// Higher is more severe.
    pub fn severity(&self) -> u8 {
        match self {
            AlertKind::Danger => 2,
            AlertKind::Warning => 1,
            AlertKind::Info => 0,
        }
    }
}

/// Server-generated alert. Dismissal is client-only state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "alert_id")]
    pub id: String,
    #[serde(rename = "alert_type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub metric: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub current_value: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub threshold: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpis_accept_decimal_strings() {
        let json = r#"{
            "total_revenue": "152340.55",
            "total_orders": 812,
            "total_customers": 640,
            "avg_order_value": "187.61",
            "new_customers": 210,
            "repeat_rate": 32.5,
            "total_ad_spend": "20100.00",
            "roas": "7.58",
            "cac": null,
            "revenue_change": 12.4,
            "orders_change": null,
            "customers_change": -3.1,
            "aov_change": null
        }"#;
        let kpis: KpiData = serde_json::from_str(json).unwrap();
        assert_eq!(kpis.total_revenue, 152340.55);
        assert_eq!(kpis.roas, Some(7.58));
        assert_eq!(kpis.cac, None);
        assert_eq!(kpis.customers_change, Some(-3.1));
    }

    #[test]
    fn test_alert_field_renames() {
        let json = r#"{
            "alert_id": "rev_drop",
            "alert_type": "danger",
            "title": "Queda de receita",
            "message": "Receita caiu 25%",
            "metric": "revenue",
            "current_value": 1000.0,
            "threshold": -20,
            "change_percent": -25.0,
            "created_at": "2024-03-15T10:00:00"
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.id, "rev_drop");
        assert_eq!(alert.kind, AlertKind::Danger);
        assert_eq!(alert.change_percent, Some(-25.0));
    }

    #[test]
    fn test_revenue_point_parses_iso_date() {
        let point: RevenuePoint =
            serde_json::from_str(r#"{"date":"2024-03-15","revenue":"99.9","orders":3,"customers":2}"#)
                .unwrap();
        assert_eq!(point.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(point.revenue, 99.9);
    }
}
