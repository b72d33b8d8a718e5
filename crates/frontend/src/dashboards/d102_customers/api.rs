use crate::shared::api_utils::{get_json, non_empty, ApiError, NoParams};
use crate::shared::query::{Query, QueryKey};
use contracts::dashboards::d102_customers::{
    CohortCell, CohortLtv, Customer, CustomerDistribution, CustomerFilter, CustomerList, CustomerOrder, RfmSegment,
};
use contracts::dashboards::d105_predictions::CustomerLtvPrediction;
use contracts::shared::pagination::PageRequest;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct ListParams {
    page: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    segment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

impl ListParams {
    fn new(request: PageRequest, filter: CustomerFilter) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            segment: non_empty(filter.segment),
            channel: non_empty(filter.channel),
            search: non_empty(filter.search),
        }
    }
}

pub async fn get_list(request: PageRequest, filter: CustomerFilter) -> Result<CustomerList, ApiError> {
    get_json("/customers/list", &ListParams::new(request, filter)).await
}

pub async fn get_rfm_segments() -> Result<Vec<RfmSegment>, ApiError> {
    get_json("/customers/rfm-segments", &NoParams {}).await
}

/// One row per cohort month and months since acquisition.
pub async fn get_cohort_analysis() -> Result<Vec<CohortCell>, ApiError> {
    get_json("/customers/cohort-analysis", &NoParams {}).await
}

pub async fn get_ltv_by_cohort() -> Result<Vec<CohortLtv>, ApiError> {
    get_json("/customers/ltv-by-cohort", &NoParams {}).await
}

pub async fn get_distribution() -> Result<CustomerDistribution, ApiError> {
    get_json("/customers/distribution", &NoParams {}).await
}

pub async fn get_customer(customer_id: i64) -> Result<Customer, ApiError> {
    get_json(&format!("/customers/{}", customer_id), &NoParams {}).await
}

/// Last orders of a customer, newest first.
pub async fn get_customer_orders(customer_id: i64) -> Result<Vec<CustomerOrder>, ApiError> {
    get_json(&format!("/customers/{}/orders", customer_id), &NoParams {}).await
}

pub async fn get_customer_ltv(customer_id: i64) -> Result<CustomerLtvPrediction, ApiError> {
    get_json(&format!("/predictions/customer-ltv/{}", customer_id), &NoParams {}).await
}

pub fn list_query(request: PageRequest, filter: CustomerFilter) -> Query<CustomerList> {
    let key = QueryKey::new("customers-list")
        .param("page", request.page)
        .param("limit", request.limit)
        .param_opt("segment", filter.segment.as_deref())
        .param_opt("channel", filter.channel.as_deref())
        .param_opt("search", filter.search.as_deref());
    Query::new(key, move || get_list(request, filter.clone()))
}

pub fn rfm_segments_query() -> Query<Vec<RfmSegment>> {
    Query::new(QueryKey::new("customers-rfm"), get_rfm_segments)
}

pub fn cohort_query() -> Query<Vec<CohortCell>> {
    Query::new(QueryKey::new("customers-cohort"), get_cohort_analysis)
}

pub fn ltv_by_cohort_query() -> Query<Vec<CohortLtv>> {
    Query::new(QueryKey::new("customers-ltv-cohort"), get_ltv_by_cohort)
}

pub fn distribution_query() -> Query<CustomerDistribution> {
    Query::new(QueryKey::new("customers-distribution"), get_distribution)
}

pub fn customer_query(customer_id: i64) -> Query<Customer> {
    Query::new(QueryKey::new("customer").param("id", customer_id), move || get_customer(customer_id))
}

pub fn customer_orders_query(customer_id: i64) -> Query<Vec<CustomerOrder>> {
    Query::new(
        QueryKey::new("customer-orders").param("id", customer_id),
        move || get_customer_orders(customer_id),
    )
}

pub fn customer_ltv_query(customer_id: i64) -> Query<CustomerLtvPrediction> {
    Query::new(
        QueryKey::new("customer-ltv").param("id", customer_id),
        move || get_customer_ltv(customer_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::build_url;

    #[test]
    fn test_blank_filters_are_not_sent() {
        let filter = CustomerFilter {
            segment: Some("Champions".into()),
            channel: Some(String::new()),
            search: Some("  ".into()),
        };
        let url = build_url("/api", "/customers/list", &ListParams::new(PageRequest::new(2, 20), filter)).unwrap();
        assert_eq!(url, "/api/customers/list?page=2&limit=20&segment=Champions");
    }

    #[test]
    fn test_list_key_ignores_blank_filters() {
        let blank = CustomerFilter { search: Some(" ".into()), ..Default::default() };
        assert_eq!(
            list_query(PageRequest::default(), blank).key(),
            list_query(PageRequest::default(), CustomerFilter::default()).key()
        );
        let filtered = CustomerFilter { channel: Some("Email".into()), ..Default::default() };
        assert_eq!(
            list_query(PageRequest::new(3, 50), filtered).key().to_string(),
            "customers-list?channel=Email&limit=50&page=3"
        );
    }
}
