use crate::shared::numeric::lenient;
use serde::{Deserialize, Serialize};

/// `/marketing/campaign-performance` row. Ratios are precomputed server-side
/// and `None` when their denominator was zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignPerformance {
    pub campaign_id: i64,
    pub platform: String,
    pub campaign_name: Option<String>,
    pub funnel_stage: Option<String>,
    pub campaign_type: Option<String>,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub spend: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub conversions: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub roas: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub cpa: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub ctr: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub cpc: Option<f64>,
}

/// `/marketing/roas-by-platform`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformPerformance {
    pub platform: String,
    #[serde(default)]
    pub campaigns: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub spend: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub roas: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub conversions: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub cpa: Option<f64>,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ctr: f64,
}

/// `/marketing/spend-revenue` daily point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendRevenuePoint {
    pub date: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub spend: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub roas: Option<f64>,
}

/// `/marketing/attribution`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionRow {
    pub channel: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub attributed_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub attributed_orders: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
}

/// `/marketing/funnel-performance` (TOFU / MOFU / BOFU).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelPerformance {
    pub funnel_stage: Option<String>,
    #[serde(default)]
    pub order: u32,
    #[serde(default, deserialize_with = "lenient::number")]
    pub spend: f64,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub conversions: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub roas: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub cpa: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_with_zero_spend_has_no_ratios() {
        let json = r#"{
            "campaign_id": 3, "platform": "google", "campaign_name": null,
            "funnel_stage": "TOFU", "campaign_type": "search",
            "impressions": 0, "clicks": 0, "spend": 0.0, "conversions": 0,
            "revenue": 0.0, "roas": null, "cpa": null, "ctr": null, "cpc": null
        }"#;
        let campaign: CampaignPerformance = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.roas, None);
        assert_eq!(campaign.spend, 0.0);
    }
}
