use crate::shared::numeric::lenient;
use crate::shared::pagination::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub external_product_id: String,
    pub sku: Option<String>,
    pub product_name: String,
    pub category_level_1: Option<String>,
    pub category_level_2: Option<String>,
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub cost_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub margin_percent: Option<f64>,
    #[serde(default)]
    pub is_active: bool,
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub total_units_sold: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_revenue: f64,
    pub abc_classification: Option<String>,
}

pub type ProductList = Page<Product>;

/// Optional filters of `/products/list`. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub abc: Option<String>,
    pub search: Option<String>,
}

/// `/products/abc-classification` tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbcTier {
    pub classification: String,
    #[serde(default)]
    pub product_count: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue_percentage: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub cumulative_percentage: f64,
}

/// `/products/top-performers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformer {
    pub rank: u32,
    pub product_id: i64,
    pub product_name: String,
    pub category: Option<String>,
    pub abc_classification: Option<String>,
    #[serde(default)]
    pub units_sold: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub margin_percent: f64,
}

/// `/products/by-category`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: Option<String>,
    #[serde(default)]
    pub products: u64,
    #[serde(default)]
    pub units_sold: u64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub avg_margin: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTrend {
    pub product_id: i64,
    pub product_name: String,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub first_half_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub second_half_revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub change_percent: f64,
}

/// `/products/trends`: already sorted and truncated server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductTrends {
    #[serde(default)]
    pub trending: Vec<ProductTrend>,
    #[serde(default)]
    pub declining: Vec<ProductTrend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critical,
    Low,
    Healthy,
    Overstock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Critical => "Crítico",
            StockStatus::Low => "Baixo",
            StockStatus::Healthy => "Saudável",
            StockStatus::Overstock => "Excesso",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub product_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub daily_velocity: f64,
    /// `None` when the product did not sell in the window.
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub days_of_stock: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub stock_value: f64,
    pub status: StockStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockSummary {
    #[serde(default)]
    pub critical: u64,
    #[serde(default)]
    pub low: u64,
    #[serde(default)]
    pub healthy: u64,
    #[serde(default)]
    pub overstock: u64,
}

/// `/products/stock-analysis`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockAnalysis {
    #[serde(default)]
    pub products: Vec<StockItem>,
    #[serde(default)]
    pub summary: StockSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_item_without_velocity() {
        let json = r#"{
            "product_id": 9, "product_name": "Camiseta", "stock_quantity": 40,
            "daily_velocity": 0, "days_of_stock": null, "stock_value": "1200.00",
            "status": "overstock"
        }"#;
        let item: StockItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.days_of_stock, None);
        assert_eq!(item.status, StockStatus::Overstock);
        assert_eq!(item.stock_value, 1200.0);
    }
}
