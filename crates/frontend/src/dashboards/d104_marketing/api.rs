use crate::shared::api_utils::{get_json, non_empty, ApiError};
use crate::shared::query::{Query, QueryKey};
use contracts::dashboards::d104_marketing::{
    AttributionRow, CampaignPerformance, FunnelPerformance, PlatformPerformance, SpendRevenuePoint,
};
use contracts::shared::period::Period;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
struct PeriodParams {
    period: Period,
}

#[derive(Debug, Clone, Serialize)]
struct CampaignParams {
    period: Period,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
}

pub async fn get_campaign_performance(
    period: Period,
    platform: Option<String>,
) -> Result<Vec<CampaignPerformance>, ApiError> {
    let params = CampaignParams { period, platform: non_empty(platform) };
    get_json("/marketing/campaign-performance", &params).await
}

pub async fn get_roas_by_platform(period: Period) -> Result<Vec<PlatformPerformance>, ApiError> {
    get_json("/marketing/roas-by-platform", &PeriodParams { period }).await
}

/// Daily ad spend against attributed revenue.
pub async fn get_spend_revenue(period: Period) -> Result<Vec<SpendRevenuePoint>, ApiError> {
    get_json("/marketing/spend-revenue", &PeriodParams { period }).await
}

pub async fn get_attribution(period: Period) -> Result<Vec<AttributionRow>, ApiError> {
    get_json("/marketing/attribution", &PeriodParams { period }).await
}

pub async fn get_funnel_performance(period: Period) -> Result<Vec<FunnelPerformance>, ApiError> {
    get_json("/marketing/funnel-performance", &PeriodParams { period }).await
}

pub fn campaigns_query(period: Period, platform: Option<String>) -> Query<Vec<CampaignPerformance>> {
    let key = QueryKey::new("marketing-campaigns")
        .param("period", period)
        .param_opt("platform", platform.as_deref());
    Query::new(key, move || get_campaign_performance(period, platform.clone()))
}

pub fn roas_by_platform_query(period: Period) -> Query<Vec<PlatformPerformance>> {
    Query::new(
        QueryKey::new("marketing-roas-platform").param("period", period),
        move || get_roas_by_platform(period),
    )
}

pub fn spend_revenue_query(period: Period) -> Query<Vec<SpendRevenuePoint>> {
    Query::new(
        QueryKey::new("marketing-spend-revenue").param("period", period),
        move || get_spend_revenue(period),
    )
}

pub fn attribution_query(period: Period) -> Query<Vec<AttributionRow>> {
    Query::new(QueryKey::new("marketing-attribution").param("period", period), move || get_attribution(period))
}

pub fn funnel_query(period: Period) -> Query<Vec<FunnelPerformance>> {
    Query::new(
        QueryKey::new("marketing-funnel").param("period", period),
        move || get_funnel_performance(period),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_key_with_and_without_platform() {
        assert_eq!(
            campaigns_query(Period::Days30, None).key().to_string(),
            "marketing-campaigns?period=30d"
        );
        assert_eq!(
            campaigns_query(Period::Days30, Some("meta".into())).key().to_string(),
            "marketing-campaigns?period=30d&platform=meta"
        );
        assert_eq!(
            campaigns_query(Period::Days30, Some("".into())).key(),
            campaigns_query(Period::Days30, None).key()
        );
    }
}
