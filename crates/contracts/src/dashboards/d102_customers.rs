use crate::shared::numeric::lenient;
use crate::shared::pagination::Page;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i64,
    pub external_customer_id: String,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub country: String,
    pub first_order_date: Option<NaiveDate>,
    pub first_order_channel: Option<String>,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub average_order_value: f64,
    pub last_order_date: Option<NaiveDate>,
    pub days_since_last_order: Option<i64>,
    pub rfm_segment: Option<String>,
    #[serde(default)]
    pub is_repeat_customer: bool,
    #[serde(default)]
    pub is_vip: bool,
    #[serde(default)]
    pub is_churned: bool,
}

pub type CustomerList = Page<Customer>;

/// Optional filters of `/customers/list`. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerFilter {
    pub segment: Option<String>,
    pub channel: Option<String>,
    pub search: Option<String>,
}

/// `/customers/rfm-segments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfmSegment {
    pub segment: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_orders: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_revenue: f64,
}

/// `/customers/cohort-analysis` cell: one cohort at one month offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortCell {
    pub cohort_month: String,
    pub months_since_acquisition: u32,
    #[serde(default)]
    pub cohort_size: u64,
    #[serde(default)]
    pub active_customers: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub retention_rate: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ltv: f64,
}

/// `/customers/ltv-by-cohort`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortLtv {
    pub cohort_month: String,
    pub acquisition_channel: Option<String>,
    #[serde(default)]
    pub cohort_size: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_ltv: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_ltv: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_orders: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelShare {
    pub channel: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
}

/// `/customers/distribution`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDistribution {
    #[serde(default)]
    pub total_customers: u64,
    #[serde(default)]
    pub new_customers_30d: u64,
    #[serde(default)]
    pub repeat_customers: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub repeat_rate: f64,
    #[serde(default)]
    pub churned_customers: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub churn_rate: f64,
    #[serde(default)]
    pub vip_customers: u64,
    #[serde(default)]
    pub by_channel: Vec<ChannelShare>,
}

/// `/customers/{id}/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerOrder {
    pub order_id: i64,
    pub external_order_id: String,
    pub order_date: String,
    pub status: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_amount: f64,
    #[serde(default)]
    pub items: u32,
    pub channel: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_list_page() {
        let json = r#"{
            "items": [{
                "customer_id": 1,
                "external_customer_id": "C-0001",
                "city": "São Paulo",
                "state": "SP",
                "country": "Brasil",
                "first_order_date": "2023-01-10",
                "first_order_channel": "Paid Social",
                "total_orders": 4,
                "total_revenue": "812.40",
                "average_order_value": "203.10",
                "last_order_date": "2024-02-01",
                "days_since_last_order": 43,
                "rfm_segment": "Loyal Customers",
                "is_repeat_customer": true,
                "is_vip": false,
                "is_churned": false
            }],
            "total": 1, "page": 1, "limit": 20, "pages": 1
        }"#;
        let list: CustomerList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items[0].total_revenue, 812.4);
        assert_eq!(list.items[0].rfm_segment.as_deref(), Some("Loyal Customers"));
        assert!(!list.has_next());
    }

    #[test]
    fn test_distribution_without_channels() {
        let json = r#"{"total_customers": 0, "repeat_rate": 0, "churn_rate": 0}"#;
        let dist: CustomerDistribution = serde_json::from_str(json).unwrap();
        assert!(dist.by_channel.is_empty());
    }
}
