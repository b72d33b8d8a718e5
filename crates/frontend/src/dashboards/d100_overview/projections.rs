use crate::shared::chart::ChartDatum;
use crate::shared::colors::{color_for, CHANNEL_COLORS};
use crate::shared::date_utils::short_date;
use crate::shared::formatters::{format_currency, format_number, format_percent, format_roas};
use contracts::dashboards::d100_overview::{Alert, KpiData, RevenuePoint, TopChannel};
use std::collections::HashSet;

/// Alerts shown on the dashboard panel.
pub const PANEL_ALERTS: usize = 3;

pub fn channel_revenue(channels: &[TopChannel]) -> Vec<ChartDatum> {
    channels
        .iter()
        .enumerate()
        .map(|(i, c)| ChartDatum::new(c.channel.clone(), c.revenue, color_for(&c.channel, i, CHANNEL_COLORS)))
        .collect()
}

/// Not dismissed, in server order.
pub fn visible_alerts(alerts: &[Alert], dismissed: &HashSet<String>, limit: usize) -> Vec<Alert> {
    alerts
        .iter()
        .filter(|a| !dismissed.contains(&a.id))
        .take(limit)
        .cloned()
        .collect()
}

/// Label and icon of the secondary KPI row, in display order.
pub const SECONDARY_KPIS: [(&str, &str); 4] = [
    ("Novos Clientes", "customers"),
    ("Taxa de Recompra", "repeat"),
    ("ROAS", "trending-up"),
    ("CAC", "marketing"),
];

/// Formatted values matching [`SECONDARY_KPIS`].
pub fn secondary_kpi_values(kpis: &KpiData) -> [String; 4] {
    [
        format_number(kpis.new_customers as f64),
        format_percent(kpis.repeat_rate, 1),
        format_roas(kpis.roas),
        kpis.cac.filter(|c| *c != 0.0).map(format_currency).unwrap_or_else(|| "-".to_string()),
    ]
}

/// X-axis labels and the two series of the revenue chart.
pub fn revenue_series(points: &[RevenuePoint]) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let labels = points.iter().map(|p| short_date(p.date)).collect();
    let revenue = points.iter().map(|p| p.revenue).collect();
    let orders = points.iter().map(|p| p.orders as f64).collect();
    (labels, revenue, orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::dashboards::d100_overview::AlertKind;

    fn channel(name: &str, revenue: f64) -> TopChannel {
        TopChannel { channel: name.to_string(), orders: 1, revenue, percentage: 0.0 }
    }

    fn alert(id: &str) -> Alert {
        Alert {
            id: id.to_string(),
            kind: AlertKind::Warning,
            title: String::new(),
            message: String::new(),
            metric: String::new(),
            current_value: 0.0,
            threshold: 0.0,
            change_percent: None,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_channel_colors() {
        let data = channel_revenue(&[channel("Email", 10.0), channel("Podcast", 5.0)]);
        assert_eq!(data[0].color, "#f59e0b");
        assert_eq!(data[1].color, crate::shared::colors::palette(1));
        assert_eq!(data[1].value, 5.0);
    }

    #[test]
    fn test_dismissed_alerts_are_hidden() {
        let alerts = vec![alert("a"), alert("b"), alert("c"), alert("d")];
        let dismissed: HashSet<String> = ["b".to_string()].into_iter().collect();
        let visible = visible_alerts(&alerts, &dismissed, PANEL_ALERTS);
        let ids: Vec<&str> = visible.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_secondary_kpis_placeholders() {
        let kpis: KpiData = serde_json::from_str(r#"{"new_customers": 1200, "repeat_rate": "23.46", "cac": 0}"#).unwrap();
        assert_eq!(secondary_kpi_values(&kpis), ["1.200", "23.5%", "-", "-"]);
    }

    #[test]
    fn test_revenue_series() {
        let points = vec![RevenuePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            revenue: 100.0,
            orders: 4,
            customers: 3,
        }];
        let (labels, revenue, orders) = revenue_series(&points);
        assert_eq!(labels, vec!["15 de mar."]);
        assert_eq!(revenue, vec![100.0]);
        assert_eq!(orders, vec![4.0]);
    }
}
