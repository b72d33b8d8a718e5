use crate::shared::api_utils::{get_json, ApiError, NoParams};
use crate::shared::query::{Query, QueryKey};
use contracts::dashboards::d101_sales::{
    FunnelStage, HeatmapCell, PeriodComparison, SalesByChannel, SalesByPeriod, SalesOverview,
};
use contracts::shared::period::{GroupBy, Period};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
struct PeriodParams {
    period: Period,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct ByPeriodParams {
    groupby: GroupBy,
    period: Period,
}

/// Current and previous window totals with their changes.
pub async fn get_overview(period: Period) -> Result<SalesOverview, ApiError> {
    get_json("/sales/overview", &PeriodParams { period }).await
}

pub async fn get_by_channel(period: Period) -> Result<Vec<SalesByChannel>, ApiError> {
    get_json("/sales/by-channel", &PeriodParams { period }).await
}

pub async fn get_by_period(group_by: GroupBy, period: Period) -> Result<Vec<SalesByPeriod>, ApiError> {
    get_json("/sales/by-period", &ByPeriodParams { groupby: group_by, period }).await
}

pub async fn get_funnel(period: Period) -> Result<Vec<FunnelStage>, ApiError> {
    get_json("/sales/funnel", &PeriodParams { period }).await
}

/// Orders by weekday and hour.
pub async fn get_heatmap(period: Period) -> Result<Vec<HeatmapCell>, ApiError> {
    get_json("/sales/heatmap", &PeriodParams { period }).await
}

/// Fixed calendar windows, independent of the selected period.
pub async fn get_comparison() -> Result<PeriodComparison, ApiError> {
    get_json("/sales/comparison", &NoParams {}).await
}

pub fn overview_query(period: Period) -> Query<SalesOverview> {
    Query::new(QueryKey::new("sales-overview").param("period", period), move || get_overview(period))
}

pub fn by_channel_query(period: Period) -> Query<Vec<SalesByChannel>> {
    Query::new(QueryKey::new("sales-by-channel").param("period", period), move || get_by_channel(period))
}

pub fn by_period_query(group_by: GroupBy, period: Period) -> Query<Vec<SalesByPeriod>> {
    Query::new(
        QueryKey::new("sales-by-period")
            .param("groupby", group_by)
            .param("period", period),
        move || get_by_period(group_by, period),
    )
}

pub fn funnel_query(period: Period) -> Query<Vec<FunnelStage>> {
    Query::new(QueryKey::new("sales-funnel").param("period", period), move || get_funnel(period))
}

pub fn heatmap_query(period: Period) -> Query<Vec<HeatmapCell>> {
    Query::new(QueryKey::new("sales-heatmap").param("period", period), move || get_heatmap(period))
}

pub fn comparison_query() -> Query<PeriodComparison> {
    Query::new(QueryKey::new("sales-comparison"), get_comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_period_key_tracks_both_selectors() {
        assert_eq!(
            by_period_query(GroupBy::Week, Period::Days90).key().to_string(),
            "sales-by-period?groupby=week&period=90d"
        );
        assert_ne!(
            by_period_query(GroupBy::Day, Period::Days30).key(),
            by_period_query(GroupBy::Month, Period::Days30).key()
        );
    }

    #[test]
    fn test_comparison_key_has_no_params() {
        assert_eq!(comparison_query().key().to_string(), "sales-comparison");
        assert_eq!(overview_query(Period::Year).key().get("period"), Some("1y"));
    }
}
