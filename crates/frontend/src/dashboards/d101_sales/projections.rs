use crate::shared::chart::{bar_fraction, ChartDatum};
use crate::shared::colors::{color_for, CHANNEL_COLORS};
use crate::shared::date_utils::{format_date, format_month};
use contracts::dashboards::d101_sales::{HeatmapCell, PeriodComparison, SalesByChannel, SalesByPeriod};
use contracts::shared::period::GroupBy;

/// Comparison windows in display order.
pub const COMPARISON_WINDOWS: [(&str, &str); 6] = [
    ("today", "Hoje"),
    ("yesterday", "Ontem"),
    ("last_7_days", "7 dias"),
    ("last_30_days", "30 dias"),
    ("this_month", "Este mês"),
    ("last_month", "Mês passado"),
];

/// Row labels of the heatmap, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];
pub const HOURS: usize = 24;

/// Narrowest funnel bar, so the count stays readable.
pub const FUNNEL_MIN_WIDTH: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub revenue: f64,
    pub orders: u64,
}

/// Known windows in fixed order; windows missing from the payload are skipped.
pub fn comparison_rows(comparison: &PeriodComparison) -> Vec<ComparisonRow> {
    COMPARISON_WINDOWS
        .iter()
        .filter_map(|(key, label)| {
            comparison.get(*key).map(|w| ComparisonRow {
                label,
                revenue: w.revenue,
                orders: w.orders,
            })
        })
        .collect()
}

pub fn channel_revenue(channels: &[SalesByChannel]) -> Vec<ChartDatum> {
    channels
        .iter()
        .enumerate()
        .map(|(i, c)| ChartDatum::new(c.channel.clone(), c.revenue, color_for(&c.channel, i, CHANNEL_COLORS)))
        .collect()
}

/// Axis label of a time bucket.
pub fn bucket_label(group_by: GroupBy, period: &str) -> String {
    match group_by {
        GroupBy::Month => format_month(period.get(..7).unwrap_or(period)),
        GroupBy::Day | GroupBy::Week => format_date(period),
    }
}

/// Labels and revenue of the by-period series.
pub fn period_series(group_by: GroupBy, buckets: &[SalesByPeriod]) -> (Vec<String>, Vec<f64>) {
    buckets
        .iter()
        .map(|b| (bucket_label(group_by, &b.period), b.revenue))
        .unzip()
}

/// Funnel bar width in percent.
pub fn funnel_width(percentage: f64) -> f64 {
    if !percentage.is_finite() {
        return FUNNEL_MIN_WIDTH;
    }
    percentage.clamp(FUNNEL_MIN_WIDTH, 100.0)
}

/// Orders per weekday (rows, Sunday first) and hour (columns).
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub orders: [[u64; HOURS]; 7],
    pub max: u64,
}

impl HeatmapGrid {
    /// Cells outside 0..7 × 0..24 are ignored.
    pub fn from_cells(cells: &[HeatmapCell]) -> Self {
        let mut orders = [[0_u64; HOURS]; 7];
        for cell in cells {
            let (day, hour) = (cell.day_of_week as usize, cell.hour as usize);
            if day < 7 && hour < HOURS {
                orders[day][hour] += cell.orders;
            }
        }
        let max = orders.iter().flatten().copied().max().unwrap_or(0);
        Self { orders, max }
    }

    /// `0..=1` relative to the busiest cell; an empty grid is all zeros.
    pub fn intensity(&self, day: usize, hour: usize) -> f64 {
        let value = self
            .orders
            .get(day)
            .and_then(|row| row.get(hour))
            .copied()
            .unwrap_or(0);
        bar_fraction(value as f64, self.max as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d101_sales::ComparisonWindow;

    fn cell(day: u8, hour: u8, orders: u64) -> HeatmapCell {
        HeatmapCell { day_of_week: day, hour, orders, revenue: 0.0 }
    }

    #[test]
    fn test_comparison_rows_fixed_order() {
        let mut comparison = PeriodComparison::new();
        for key in ["last_month", "today", "last_7_days"] {
            comparison.insert(key.to_string(), ComparisonWindow { orders: 2, revenue: 10.0, customers: 1 });
        }
        comparison.insert("unknown".to_string(), ComparisonWindow::default());
        let labels: Vec<&str> = comparison_rows(&comparison).iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Hoje", "7 dias", "Mês passado"]);
    }

    #[test]
    fn test_heatmap_intensity() {
        let grid = HeatmapGrid::from_cells(&[cell(0, 10, 4), cell(6, 23, 8), cell(7, 1, 99), cell(1, 24, 99)]);
        assert_eq!(grid.max, 8);
        assert_eq!(grid.intensity(0, 10), 0.5);
        assert_eq!(grid.intensity(6, 23), 1.0);
        assert_eq!(grid.intensity(3, 3), 0.0);
        assert_eq!(grid.intensity(9, 3), 0.0);
    }

    #[test]
    fn test_empty_heatmap_has_zero_intensity() {
        let grid = HeatmapGrid::from_cells(&[]);
        assert_eq!(grid.max, 0);
        assert_eq!(grid.intensity(0, 0), 0.0);
    }

    #[test]
    fn test_funnel_width_is_clamped() {
        assert_eq!(funnel_width(3.0), FUNNEL_MIN_WIDTH);
        assert_eq!(funnel_width(64.5), 64.5);
        assert_eq!(funnel_width(140.0), 100.0);
        assert_eq!(funnel_width(f64::NAN), FUNNEL_MIN_WIDTH);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(bucket_label(GroupBy::Day, "2024-03-15"), "15 de mar.");
        assert_eq!(bucket_label(GroupBy::Month, "2024-03-01T00:00:00"), "mar. 2024");
        assert_eq!(bucket_label(GroupBy::Month, "x"), "x");
    }
}
