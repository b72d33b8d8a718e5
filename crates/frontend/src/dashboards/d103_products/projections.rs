use crate::shared::chart::{top_n, ChartDatum};
use crate::shared::colors::{color_for, with_alpha, ABC_COLORS, CHANNEL_COLORS, GRAY};
use contracts::dashboards::d103_products::{AbcTier, CategorySales, StockStatus, StockSummary};

pub const CATEGORY_ROWS: usize = 8;
pub const STOCK_ROWS: usize = 10;
pub const ABC_CLASSES: [&str; 3] = ["A", "B", "C"];

pub fn abc_label(classification: &str) -> String {
    format!("Classe {}", classification)
}

/// Revenue per ABC tier.
pub fn abc_chart(tiers: &[AbcTier]) -> Vec<ChartDatum> {
    tiers
        .iter()
        .enumerate()
        .map(|(i, t)| ChartDatum::new(abc_label(&t.classification), t.revenue, color_for(&t.classification, i, ABC_COLORS)))
        .collect()
}

/// Tinted chip in the tier color; unknown tiers are gray.
pub fn abc_badge_style(classification: &str) -> String {
    let color = ABC_COLORS
        .iter()
        .find(|(name, _)| *name == classification)
        .map(|(_, color)| *color)
        .unwrap_or(GRAY);
    format!("background-color: {}; color: {};", with_alpha(color, "20"), color)
}

/// Top categories by revenue, in payload order.
pub fn category_chart(categories: &[CategorySales]) -> Vec<ChartDatum> {
    top_n(categories, CATEGORY_ROWS)
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let name = c.category.unwrap_or_else(|| "Sem categoria".to_string());
            let color = color_for(&name, i, CHANNEL_COLORS);
            ChartDatum::new(name, c.revenue, color)
        })
        .collect()
}

pub fn stock_status_class(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Critical => "badge badge--danger",
        StockStatus::Low => "badge badge--warning",
        StockStatus::Healthy => "badge badge--success",
        StockStatus::Overstock => "badge badge--info",
    }
}

/// Summary counters in severity order.
pub fn stock_counters(summary: &StockSummary) -> [(StockStatus, u64); 4] {
    [
        (StockStatus::Critical, summary.critical),
        (StockStatus::Low, summary.low),
        (StockStatus::Healthy, summary.healthy),
        (StockStatus::Overstock, summary.overstock),
    ]
}

/// Whole days of cover; products that are not selling last forever.
pub fn days_of_stock_label(days: Option<f64>) -> String {
    match days {
        Some(d) if d.is_finite() => format!("{:.0}", d),
        _ => "∞".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: Option<&str>, revenue: f64) -> CategorySales {
        CategorySales {
            category: name.map(str::to_string),
            products: 1,
            units_sold: 1,
            revenue,
            avg_margin: 0.0,
            percentage: 0.0,
        }
    }

    #[test]
    fn test_category_chart_keeps_top_eight() {
        let categories: Vec<CategorySales> = (0..12).map(|i| category(Some("Moda"), 100.0 - i as f64)).collect();
        assert_eq!(category_chart(&categories).len(), CATEGORY_ROWS);
        let unnamed = category_chart(&[category(None, 5.0)]);
        assert_eq!(unnamed[0].name, "Sem categoria");
    }

    #[test]
    fn test_abc_chart_labels_and_colors() {
        let tiers = vec![AbcTier {
            classification: "B".into(),
            product_count: 30,
            revenue: 15000.0,
            revenue_percentage: 15.0,
            cumulative_percentage: 95.0,
        }];
        assert_eq!(abc_chart(&tiers), vec![ChartDatum::new("Classe B", 15000.0, "#f59e0b")]);
        assert_eq!(abc_badge_style("A"), "background-color: #10b98120; color: #10b981;");
        assert!(abc_badge_style("Z").contains(GRAY));
    }

    #[test]
    fn test_days_of_stock_label() {
        assert_eq!(days_of_stock_label(Some(12.4)), "12");
        assert_eq!(days_of_stock_label(None), "∞");
        assert_eq!(days_of_stock_label(Some(f64::INFINITY)), "∞");
    }

    #[test]
    fn test_stock_counters_order() {
        let summary = StockSummary { critical: 3, low: 5, healthy: 40, overstock: 2 };
        let counters = stock_counters(&summary);
        assert_eq!(counters[0], (StockStatus::Critical, 3));
        assert_eq!(counters[3], (StockStatus::Overstock, 2));
    }
}
