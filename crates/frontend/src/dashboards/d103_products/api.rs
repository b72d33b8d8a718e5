use crate::shared::api_utils::{get_json, non_empty, ApiError, NoParams};
use crate::shared::query::{Query, QueryKey};
use contracts::dashboards::d103_products::{
    AbcTier, CategorySales, Product, ProductFilter, ProductList, ProductTrends, StockAnalysis, TopPerformer,
};
use contracts::shared::pagination::PageRequest;
use contracts::shared::period::Period;
use serde::Serialize;

pub const TOP_PERFORMERS_LIMIT: u32 = 10;

#[derive(Debug, Clone, Copy, Serialize)]
struct PeriodParams {
    period: Period,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct TopParams {
    limit: u32,
    period: Period,
}

#[derive(Debug, Clone, Serialize)]
struct ListParams {
    page: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    abc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

impl ListParams {
    fn new(request: PageRequest, filter: ProductFilter) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            category: non_empty(filter.category),
            abc: non_empty(filter.abc),
            search: non_empty(filter.search),
        }
    }
}

pub async fn get_list(request: PageRequest, filter: ProductFilter) -> Result<ProductList, ApiError> {
    get_json("/products/list", &ListParams::new(request, filter)).await
}

/// Revenue share of the A, B and C tiers.
pub async fn get_abc_classification() -> Result<Vec<AbcTier>, ApiError> {
    get_json("/products/abc-classification", &NoParams {}).await
}

pub async fn get_top_performers(limit: u32, period: Period) -> Result<Vec<TopPerformer>, ApiError> {
    get_json("/products/top-performers", &TopParams { limit, period }).await
}

pub async fn get_by_category(period: Period) -> Result<Vec<CategorySales>, ApiError> {
    get_json("/products/by-category", &PeriodParams { period }).await
}

/// Products rising and falling between the two halves of the period.
pub async fn get_trends(period: Period) -> Result<ProductTrends, ApiError> {
    get_json("/products/trends", &PeriodParams { period }).await
}

pub async fn get_stock_analysis() -> Result<StockAnalysis, ApiError> {
    get_json("/products/stock-analysis", &NoParams {}).await
}

pub async fn get_product(product_id: i64) -> Result<Product, ApiError> {
    get_json(&format!("/products/{}", product_id), &NoParams {}).await
}

pub fn list_query(request: PageRequest, filter: ProductFilter) -> Query<ProductList> {
    let key = QueryKey::new("products-list")
        .param("page", request.page)
        .param("limit", request.limit)
        .param_opt("category", filter.category.as_deref())
        .param_opt("abc", filter.abc.as_deref())
        .param_opt("search", filter.search.as_deref());
    Query::new(key, move || get_list(request, filter.clone()))
}

pub fn abc_query() -> Query<Vec<AbcTier>> {
    Query::new(QueryKey::new("products-abc"), get_abc_classification)
}

pub fn top_performers_query(period: Period) -> Query<Vec<TopPerformer>> {
    Query::new(
        QueryKey::new("products-top")
            .param("limit", TOP_PERFORMERS_LIMIT)
            .param("period", period),
        move || get_top_performers(TOP_PERFORMERS_LIMIT, period),
    )
}

pub fn by_category_query(period: Period) -> Query<Vec<CategorySales>> {
    Query::new(QueryKey::new("products-category").param("period", period), move || get_by_category(period))
}

pub fn trends_query(period: Period) -> Query<ProductTrends> {
    Query::new(QueryKey::new("products-trends").param("period", period), move || get_trends(period))
}

pub fn stock_query() -> Query<StockAnalysis> {
    Query::new(QueryKey::new("products-stock"), get_stock_analysis)
}

pub fn product_query(product_id: i64) -> Query<Product> {
    Query::new(QueryKey::new("product").param("id", product_id), move || get_product(product_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_utils::build_url;

    #[test]
    fn test_list_url_with_abc_filter() {
        let filter = ProductFilter { abc: Some("A".into()), ..Default::default() };
        let url = build_url("/api", "/products/list", &ListParams::new(PageRequest::default(), filter)).unwrap();
        assert_eq!(url, "/api/products/list?page=1&limit=20&abc=A");
    }

    #[test]
    fn test_period_scoped_keys() {
        assert_eq!(
            top_performers_query(Period::Days60).key().to_string(),
            "products-top?limit=10&period=60d"
        );
        assert_ne!(trends_query(Period::Days7).key(), trends_query(Period::Days90).key());
        assert_eq!(stock_query().key().to_string(), "products-stock");
    }
}
