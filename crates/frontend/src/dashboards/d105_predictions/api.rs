use crate::dashboards::d105_predictions::projections::clamp_days;
use crate::shared::api_utils::{get_json, post_json, ApiError, NoParams};
use crate::shared::query::{Query, QueryKey};
use contracts::dashboards::d105_predictions::{ChurnRisk, Recommendations, SalesForecast, SimulationRequest, SimulationResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
struct ForecastParams {
    days: u32,
}

/// Out-of-range horizons are clamped before the request is sent.
pub async fn get_sales_forecast(days: u32) -> Result<SalesForecast, ApiError> {
    get_json("/predictions/sales-forecast", &ForecastParams { days: clamp_days(days) }).await
}

pub async fn get_churn_risk() -> Result<ChurnRisk, ApiError> {
    get_json("/predictions/churn-risk", &NoParams {}).await
}

pub async fn get_recommendations() -> Result<Recommendations, ApiError> {
    get_json("/predictions/recommendations", &NoParams {}).await
}

/// Runs a what-if scenario. Every call hits the server; results are never cached.
pub async fn simulate(request: SimulationRequest) -> Result<SimulationResult, ApiError> {
    log::info!(
        "simulating scenario: spend {:+}%, price {:+}%",
        request.spend_increase,
        request.price_change
    );
    post_json("/predictions/simulate", &request).await
}

pub fn forecast_query(days: u32) -> Query<SalesForecast> {
    let days = clamp_days(days);
    Query::new(
        QueryKey::new("predictions-forecast").param("days", days),
        move || get_sales_forecast(days),
    )
}

pub fn churn_query() -> Query<ChurnRisk> {
    Query::new(QueryKey::new("predictions-churn"), get_churn_risk)
}

pub fn recommendations_query() -> Query<Recommendations> {
    Query::new(QueryKey::new("predictions-recommendations"), get_recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::build_url;

    #[test]
    fn test_forecast_key_uses_clamped_days() {
        assert_eq!(forecast_query(30).key().to_string(), "predictions-forecast?days=30");
        assert_eq!(forecast_query(365).key().to_string(), "predictions-forecast?days=90");
        assert_eq!(forecast_query(1).key(), forecast_query(7).key());
    }

    #[test]
    fn test_simulation_params_in_query_string() {
        let request = SimulationRequest { spend_increase: 20.0, price_change: -5.0 };
        let url = build_url("/api", "/predictions/simulate", &request).unwrap();
        assert!(url.starts_with("/api/predictions/simulate?spend_increase=20"));
        assert!(url.contains("&price_change=-5"));
    }
}
