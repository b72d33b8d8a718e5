use crate::shared::api_utils::{get_json, get_value, ApiError, NoParams};
use crate::shared::query::{Query, QueryKey};
use contracts::dashboards::d100_overview::{Alert, KpiData, RevenuePoint, TopChannel, TopProduct};
use contracts::shared::period::Period;
use serde::Serialize;
use serde_json::Value;

pub const TOP_PRODUCTS_LIMIT: u32 = 5;

#[derive(Debug, Clone, Copy, Serialize)]
struct PeriodParams {
    period: Period,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct TopProductsParams {
    limit: u32,
    period: Period,
}

/// Headline metrics of the period.
pub async fn get_kpis(period: Period) -> Result<KpiData, ApiError> {
    get_json("/dashboard/kpis", &PeriodParams { period }).await
}

/// Daily revenue, orders and customers.
pub async fn get_revenue_chart(period: Period) -> Result<Vec<RevenuePoint>, ApiError> {
    get_json("/dashboard/revenue-chart", &PeriodParams { period }).await
}

pub async fn get_top_products(limit: u32, period: Period) -> Result<Vec<TopProduct>, ApiError> {
    get_json("/dashboard/top-products", &TopProductsParams { limit, period }).await
}

pub async fn get_top_channels(period: Period) -> Result<Vec<TopChannel>, ApiError> {
    get_json("/dashboard/top-channels", &PeriodParams { period }).await
}

/// Active alerts. The endpoint answers with an object instead of a list
/// when there is nothing to report.
pub async fn get_alerts() -> Result<Vec<Alert>, ApiError> {
    let body = get_value("/dashboard/alerts", &NoParams {}).await?;
    alerts_from_value(body)
}

fn alerts_from_value(body: Value) -> Result<Vec<Alert>, ApiError> {
    match body {
        Value::Array(_) => serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string())),
        _ => Ok(Vec::new()),
    }
}

pub fn kpis_query(period: Period) -> Query<KpiData> {
    Query::new(QueryKey::new("dashboard-kpis").param("period", period), move || get_kpis(period))
}

pub fn revenue_chart_query(period: Period) -> Query<Vec<RevenuePoint>> {
    Query::new(
        QueryKey::new("dashboard-revenue-chart").param("period", period),
        move || get_revenue_chart(period),
    )
}

pub fn top_products_query(period: Period) -> Query<Vec<TopProduct>> {
    Query::new(
        QueryKey::new("dashboard-top-products")
            .param("limit", TOP_PRODUCTS_LIMIT)
            .param("period", period),
        move || get_top_products(TOP_PRODUCTS_LIMIT, period),
    )
}

pub fn top_channels_query(period: Period) -> Query<Vec<TopChannel>> {
    Query::new(
        QueryKey::new("dashboard-top-channels").param("period", period),
        move || get_top_channels(period),
    )
}

/// Shared by the header bell and the dashboard panel.
pub fn alerts_query() -> Query<Vec<Alert>> {
    Query::new(QueryKey::new("alerts"), get_alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_array_alerts_body_is_empty() {
        assert_eq!(alerts_from_value(json!({"detail": "no alerts"})).unwrap(), Vec::new());
        assert_eq!(alerts_from_value(Value::Null).unwrap(), Vec::new());
    }

    #[test]
    fn test_alerts_array_is_decoded() {
        let body = json!([{
            "alert_id": "rev-drop", "alert_type": "danger",
            "title": "Queda de receita", "message": "Receita caiu 25%",
            "change_percent": "-25.0"
        }]);
        let alerts = alerts_from_value(body).unwrap();
        assert_eq!(alerts[0].id, "rev-drop");
        assert_eq!(alerts[0].change_percent, Some(-25.0));
    }

    #[test]
    fn test_query_keys_follow_period() {
        assert_eq!(kpis_query(Period::Days30).key().to_string(), "dashboard-kpis?period=30d");
        assert_ne!(kpis_query(Period::Days7).key(), kpis_query(Period::Days30).key());
        assert_eq!(
            top_products_query(Period::Days7).key().to_string(),
            "dashboard-top-products?limit=5&period=7d"
        );
        assert_eq!(alerts_query().key().to_string(), "alerts");
    }
}
