use crate::shared::numeric::lenient;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient::number")]
    pub predicted_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lower_bound: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub upper_bound: f64,
    #[serde(default)]
    pub day_of_week: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSummary {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_predicted_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_daily_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub last_year_same_period: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub yoy_change: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub training_days: u32,
    #[serde(default, deserialize_with = "lenient::number")]
    pub trend_slope: f64,
}

/// `/predictions/sales-forecast`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesForecast {
    #[serde(default)]
    pub predictions: Vec<ForecastPoint>,
    #[serde(default)]
    pub summary: ForecastSummary,
    #[serde(default)]
    pub model_info: ModelInfo,
}

/// Accepted range of the `days` parameter.
pub const FORECAST_DAYS_MIN: u32 = 7;
pub const FORECAST_DAYS_MAX: u32 = 90;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChurnSummary {
    #[serde(default)]
    pub at_risk_count: u64,
    #[serde(default)]
    pub high_risk_count: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_revenue_at_risk: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtRiskCustomer {
    pub customer_id: i64,
    pub external_id: String,
    pub segment: Option<String>,
    #[serde(default)]
    pub days_since_last_order: i64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub risk_score: f64,
    #[serde(default)]
    pub risk_level: String,
}

/// `/predictions/churn-risk`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChurnRisk {
    #[serde(default)]
    pub summary: ChurnSummary,
    #[serde(default)]
    pub at_risk_customers: Vec<AtRiskCustomer>,
    #[serde(default)]
    pub high_risk_customers: Vec<AtRiskCustomer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Média",
            Priority::Low => "Baixa",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub priority: Priority,
    pub category: String,
    pub title: String,
    pub description: String,
    pub potential_impact: String,
    pub action: String,
}

/// `/predictions/recommendations`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub generated_at: String,
}

/// Query parameters of `POST /predictions/simulate`, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub spend_increase: f64,
    pub price_change: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationBaseline {
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub aov: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub aov: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue_change_pct: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub orders_change_pct: f64,
}

/// Response of `POST /predictions/simulate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    #[serde(default)]
    pub baseline: SimulationBaseline,
    #[serde(default)]
    pub simulated: SimulationOutcome,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LtvCurrentMetrics {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub aov: f64,
    #[serde(default)]
    pub customer_lifetime_days: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub monthly_frequency: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LtvProjection {
    #[serde(default, deserialize_with = "lenient::number")]
    pub ltv_1y: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ltv_3y: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub expected_orders_1y: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub retention_probability: f64,
}

/// `/predictions/customer-ltv/{id}`. Customers without history get the
/// short form (`current_ltv` / `predicted_ltv_*`), everyone else the
/// detailed one (`current_metrics` / `predictions`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerLtvPrediction {
    pub customer_id: i64,
    #[serde(default)]
    pub customer_segment: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub current_ltv: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub predicted_ltv_1y: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub predicted_ltv_3y: Option<f64>,
    #[serde(default)]
    pub current_metrics: Option<LtvCurrentMetrics>,
    #[serde(default)]
    pub predictions: Option<LtvProjection>,
    #[serde(default)]
    pub prediction_confidence: String,
}

impl CustomerLtvPrediction {
    /// One-year LTV regardless of which response form was returned.
    pub fn ltv_1y(&self) -> f64 {
        self.predictions
            .as_ref()
            .map(|p| p.ltv_1y)
            .or(self.predicted_ltv_1y)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priorities_order_high_first() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_ltv_short_form() {
        let json = r#"{
            "customer_id": 7, "current_ltv": 120.0, "predicted_ltv_1y": 120.0,
            "predicted_ltv_3y": 120.0, "prediction_confidence": "low"
        }"#;
        let ltv: CustomerLtvPrediction = serde_json::from_str(json).unwrap();
        assert_eq!(ltv.ltv_1y(), 120.0);
        assert!(ltv.current_metrics.is_none());
    }

    #[test]
    fn test_ltv_detailed_form() {
        let json = r#"{
            "customer_id": 7, "customer_segment": "Champions",
            "current_metrics": {"total_revenue": 900.0, "total_orders": 6, "aov": 150.0,
                "customer_lifetime_days": 300, "monthly_frequency": 0.6},
            "predictions": {"ltv_1y": 1764.0, "ltv_3y": 2300.5, "expected_orders_1y": 7.2,
                "retention_probability": 0.8},
            "prediction_confidence": "high"
        }"#;
        let ltv: CustomerLtvPrediction = serde_json::from_str(json).unwrap();
        assert_eq!(ltv.ltv_1y(), 1764.0);
    }
}
