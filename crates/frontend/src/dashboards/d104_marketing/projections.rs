use crate::shared::chart::{percentage_of, ratio, ChartDatum};
use crate::shared::colors::{color_for, CHANNEL_COLORS, FUNNEL_STAGE_COLORS, PLATFORM_COLORS};
use crate::shared::date_utils::format_date;
use contracts::dashboards::d104_marketing::{
    AttributionRow, CampaignPerformance, FunnelPerformance, PlatformPerformance, SpendRevenuePoint,
};

/// Sums over all campaigns of the period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CampaignTotals {
    pub spend: f64,
    pub revenue: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: f64,
}

impl CampaignTotals {
    pub fn from_campaigns(campaigns: &[CampaignPerformance]) -> Self {
        campaigns.iter().fold(Self::default(), |acc, c| Self {
            spend: acc.spend + c.spend,
            revenue: acc.revenue + c.revenue,
            impressions: acc.impressions + c.impressions,
            clicks: acc.clicks + c.clicks,
            conversions: acc.conversions + c.conversions,
        })
    }

    /// Revenue per unit of spend; 0 without spend.
    pub fn roas(&self) -> f64 {
        ratio(self.revenue, self.spend)
    }

    /// Click-through rate in percent.
    pub fn ctr(&self) -> f64 {
        percentage_of(self.clicks as f64, self.impressions as f64)
    }

    /// Conversion rate of clicks in percent.
    pub fn cvr(&self) -> f64 {
        percentage_of(self.conversions, self.clicks as f64)
    }
}

pub fn platform_revenue(platforms: &[PlatformPerformance]) -> Vec<ChartDatum> {
    platforms
        .iter()
        .enumerate()
        .map(|(i, p)| ChartDatum::new(p.platform.clone(), p.revenue, color_for(&p.platform, i, PLATFORM_COLORS)))
        .collect()
}

pub fn attribution_chart(rows: &[AttributionRow]) -> Vec<ChartDatum> {
    rows.iter()
        .enumerate()
        .map(|(i, r)| ChartDatum::new(r.channel.clone(), r.attributed_revenue, color_for(&r.channel, i, CHANNEL_COLORS)))
        .collect()
}

/// Spend per funnel stage, top of funnel first.
pub fn funnel_spend(stages: &[FunnelPerformance]) -> Vec<ChartDatum> {
    let mut sorted: Vec<&FunnelPerformance> = stages.iter().collect();
    sorted.sort_by_key(|s| s.order);
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let name = s.funnel_stage.clone().unwrap_or_else(|| "Outros".to_string());
            let color = color_for(&name, i, FUNNEL_STAGE_COLORS);
            ChartDatum::new(name, s.spend, color)
        })
        .collect()
}

/// Badge for a ROAS value: 3x and up is good, 2x acceptable.
pub fn roas_badge_class(roas: Option<f64>) -> &'static str {
    match roas {
        Some(r) if r >= 3.0 => "badge badge--success",
        Some(r) if r >= 2.0 => "badge badge--warning",
        _ => "badge badge--danger",
    }
}

/// Axis labels, spend and revenue of the spend-vs-revenue chart.
pub fn spend_revenue_series(points: &[SpendRevenuePoint]) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let labels = points.iter().map(|p| format_date(&p.date)).collect();
    let spend = points.iter().map(|p| p.spend).collect();
    let revenue = points.iter().map(|p| p.revenue).collect();
    (labels, spend, revenue)
}

/// Platforms present in the payload, for the campaign filter.
pub fn platform_names(platforms: &[PlatformPerformance]) -> Vec<String> {
    platforms.iter().map(|p| p.platform.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(spend: f64, revenue: f64, impressions: u64, clicks: u64, conversions: f64) -> CampaignPerformance {
        CampaignPerformance {
            campaign_id: 1,
            platform: "meta".into(),
            campaign_name: None,
            funnel_stage: None,
            campaign_type: None,
            impressions,
            clicks,
            spend,
            conversions,
            revenue,
            roas: None,
            cpa: None,
            ctr: None,
            cpc: None,
        }
    }

    #[test]
    fn test_totals_ratios() {
        let totals = CampaignTotals::from_campaigns(&[
            campaign(100.0, 300.0, 10_000, 200, 10.0),
            campaign(100.0, 500.0, 10_000, 200, 30.0),
        ]);
        assert_eq!(totals.spend, 200.0);
        assert_eq!(totals.roas(), 4.0);
        assert_eq!(totals.ctr(), 2.0);
        assert_eq!(totals.cvr(), 10.0);
    }

    #[test]
    fn test_zero_spend_gives_zero_roas() {
        let totals = CampaignTotals::from_campaigns(&[campaign(0.0, 250.0, 0, 0, 3.0)]);
        assert_eq!(totals.roas(), 0.0);
        assert_eq!(totals.ctr(), 0.0);
        assert_eq!(totals.cvr(), 0.0);
        assert_eq!(CampaignTotals::from_campaigns(&[]), CampaignTotals::default());
    }

    #[test]
    fn test_roas_badge() {
        assert_eq!(roas_badge_class(Some(3.0)), "badge badge--success");
        assert_eq!(roas_badge_class(Some(2.4)), "badge badge--warning");
        assert_eq!(roas_badge_class(Some(1.1)), "badge badge--danger");
        assert_eq!(roas_badge_class(None), "badge badge--danger");
    }

    #[test]
    fn test_funnel_spend_sorted_by_stage_order() {
        let stage = |name: &str, order: u32, spend: f64| FunnelPerformance {
            funnel_stage: Some(name.to_string()),
            order,
            spend,
            impressions: 0,
            clicks: 0,
            revenue: 0.0,
            conversions: 0.0,
            roas: None,
            cpa: None,
        };
        let data = funnel_spend(&[stage("BOFU", 3, 10.0), stage("TOFU", 1, 50.0), stage("MOFU", 2, 20.0)]);
        let names: Vec<&str> = data.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["TOFU", "MOFU", "BOFU"]);
        assert_eq!(data[2].color, "#10b981");
    }
}
