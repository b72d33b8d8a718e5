use crate::shared::chart::ChartDatum;
use crate::shared::colors::{color_for, CHANNEL_COLORS, RFM_SEGMENT_COLORS};
use crate::shared::date_utils::format_month;
use contracts::dashboards::d102_customers::{ChannelShare, CohortCell, Customer, RfmSegment};

/// Cohorts and months shown in the retention grid.
pub const COHORT_ROWS: usize = 6;
pub const COHORT_MONTHS: usize = 6;
pub const LTV_ROWS: usize = 10;

/// Customer count per RFM segment.
pub fn rfm_chart(segments: &[RfmSegment]) -> Vec<ChartDatum> {
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| ChartDatum::new(s.segment.clone(), s.count as f64, color_for(&s.segment, i, RFM_SEGMENT_COLORS)))
        .collect()
}

/// Acquisition revenue per channel.
pub fn channel_chart(channels: &[ChannelShare]) -> Vec<ChartDatum> {
    channels
        .iter()
        .enumerate()
        .map(|(i, c)| ChartDatum::new(c.channel.clone(), c.revenue, color_for(&c.channel, i, CHANNEL_COLORS)))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CohortRow {
    pub label: String,
    pub cohort_size: u64,
    /// Retention in percent for months `0..COHORT_MONTHS`; a missing month is 0.
    pub retention: [f64; COHORT_MONTHS],
}

/// First `COHORT_ROWS` cohorts in payload order.
pub fn cohort_grid(cells: &[CohortCell]) -> Vec<CohortRow> {
    let mut months: Vec<&str> = Vec::new();
    for cell in cells {
        if !months.contains(&cell.cohort_month.as_str()) {
            months.push(&cell.cohort_month);
        }
        if months.len() == COHORT_ROWS {
            break;
        }
    }

    months
        .into_iter()
        .map(|month| {
            let rows: Vec<&CohortCell> = cells.iter().filter(|c| c.cohort_month == month).collect();
            let mut retention = [0.0; COHORT_MONTHS];
            for row in &rows {
                if let Some(slot) = retention.get_mut(row.months_since_acquisition as usize) {
                    *slot = row.retention_rate;
                }
            }
            CohortRow {
                label: format_month(month),
                cohort_size: rows.first().map(|c| c.cohort_size).unwrap_or(0),
                retention,
            }
        })
        .collect()
}

/// Background tint proportional to retention; light text on dark cells.
pub fn retention_style(rate: f64) -> String {
    let alpha = (rate / 100.0).clamp(0.0, 1.0);
    let text = if rate > 50.0 { "#ffffff" } else { "#94a3b8" };
    format!("background-color: rgba(99, 102, 241, {:.2}); color: {};", alpha, text)
}

pub fn is_paid_channel(channel: Option<&str>) -> bool {
    channel.is_some_and(|c| c.contains("Paid"))
}

/// "São Paulo, SP", falling back to the country.
pub fn customer_location(customer: &Customer) -> String {
    match (customer.city.as_deref(), customer.state.as_deref()) {
        (Some(city), Some(state)) => format!("{}, {}", city, state),
        (Some(place), None) | (None, Some(place)) => place.to_string(),
        (None, None) => customer.country.clone(),
    }
}

/// Status chips of a customer row.
pub fn customer_badges(customer: &Customer) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if customer.is_vip {
        badges.push("VIP");
    }
    if customer.is_repeat_customer {
        badges.push("Recorrente");
    }
    if customer.is_churned {
        badges.push("Churned");
    }
    badges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cohort(month: &str, since: u32, size: u64, retention: f64) -> CohortCell {
        CohortCell {
            cohort_month: month.to_string(),
            months_since_acquisition: since,
            cohort_size: size,
            active_customers: 0,
            revenue: 0.0,
            retention_rate: retention,
            ltv: 0.0,
        }
    }

    #[test]
    fn test_cohort_grid_fills_missing_months_with_zero() {
        let cells = vec![
            cohort("2024-01", 0, 120, 100.0),
            cohort("2024-01", 2, 120, 18.5),
            cohort("2024-01", 9, 120, 3.0),
            cohort("2024-02", 0, 80, 100.0),
        ];
        let grid = cohort_grid(&cells);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].label, "jan. 2024");
        assert_eq!(grid[0].cohort_size, 120);
        assert_eq!(grid[0].retention, [100.0, 0.0, 18.5, 0.0, 0.0, 0.0]);
        assert_eq!(grid[1].cohort_size, 80);
    }

    #[test]
    fn test_cohort_grid_keeps_first_six_cohorts() {
        let cells: Vec<CohortCell> = (1..=9).map(|m| cohort(&format!("2024-{:02}", m), 0, 10, 100.0)).collect();
        let grid = cohort_grid(&cells);
        assert_eq!(grid.len(), COHORT_ROWS);
        assert_eq!(grid[5].label, "jun. 2024");
    }

    #[test]
    fn test_retention_style() {
        assert_eq!(retention_style(75.0), "background-color: rgba(99, 102, 241, 0.75); color: #ffffff;");
        assert!(retention_style(140.0).contains("1.00"));
        assert!(retention_style(20.0).contains("#94a3b8"));
    }

    #[test]
    fn test_rfm_chart_uses_segment_colors() {
        let segments = vec![RfmSegment {
            segment: "Champions".into(),
            count: 42,
            percentage: 10.0,
            total_revenue: 0.0,
            avg_orders: 0.0,
            avg_revenue: 0.0,
        }];
        assert_eq!(rfm_chart(&segments), vec![ChartDatum::new("Champions", 42.0, "#10b981")]);
    }

    #[test]
    fn test_paid_channel() {
        assert!(is_paid_channel(Some("Paid Social")));
        assert!(!is_paid_channel(Some("Email")));
        assert!(!is_paid_channel(None));
    }
}
