use crate::shared::chart::{ratio, ChartDatum};
use crate::shared::colors::{color_for, with_alpha, DANGER, INFO, PRIMARY, PRIORITY_COLORS, WARNING};
use crate::shared::components::charts::{AreaChartData, AreaSeries, ConfidenceBand};
use crate::shared::date_utils::short_date;
use contracts::dashboards::d105_predictions::{
    AtRiskCustomer, ChurnRisk, ChurnSummary, Priority, Recommendation, SalesForecast, FORECAST_DAYS_MAX,
    FORECAST_DAYS_MIN,
};

pub const DEFAULT_FORECAST_DAYS: u32 = 30;
pub const FORECAST_DAY_OPTIONS: [u32; 5] = [7, 14, 30, 60, 90];
/// High-risk customers listed under the churn chart.
pub const AT_RISK_ROWS: usize = 5;

/// Slider bounds of the scenario simulator, in percent.
pub const SPEND_RANGE: (i32, i32) = (-50, 100);
pub const PRICE_RANGE: (i32, i32) = (-20, 20);

pub fn clamp_days(days: u32) -> u32 {
    days.clamp(FORECAST_DAYS_MIN, FORECAST_DAYS_MAX)
}

/// Predicted revenue with its confidence band, one point per day.
pub fn forecast_chart(forecast: &SalesForecast) -> AreaChartData {
    let points = &forecast.predictions;
    AreaChartData {
        labels: points.iter().map(|p| short_date(p.date)).collect(),
        series: vec![AreaSeries {
            name: "Previsão".to_string(),
            color: PRIMARY,
            values: points.iter().map(|p| p.predicted_revenue).collect(),
        }],
        band: Some(ConfidenceBand {
            color: INFO,
            lower: points.iter().map(|p| p.lower_bound).collect(),
            upper: points.iter().map(|p| p.upper_bound).collect(),
        }),
    }
}

/// Mean predicted revenue per forecast day; 0 without predictions.
pub fn avg_daily_revenue(forecast: &SalesForecast) -> f64 {
    ratio(forecast.summary.total_predicted_revenue, forecast.predictions.len() as f64)
}

pub fn churn_chart(summary: &ChurnSummary) -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Em Risco", summary.at_risk_count as f64, WARNING),
        ChartDatum::new("Alto Risco", summary.high_risk_count as f64, DANGER),
    ]
}

pub fn customers_at_risk(summary: &ChurnSummary) -> u64 {
    summary.at_risk_count + summary.high_risk_count
}

pub fn top_high_risk(churn: &ChurnRisk) -> Vec<AtRiskCustomer> {
    churn.high_risk_customers.iter().take(AT_RISK_ROWS).cloned().collect()
}

/// High priority first; equal priorities keep their server order.
pub fn sorted_recommendations(recommendations: &[Recommendation]) -> Vec<Recommendation> {
    let mut sorted = recommendations.to_vec();
    sorted.sort_by_key(|r| r.priority);
    sorted
}

pub fn priority_color(priority: Priority) -> &'static str {
    color_for(priority.as_str(), 0, PRIORITY_COLORS)
}

pub fn priority_badge_style(priority: Priority) -> String {
    let color = priority_color(priority);
    format!("background: {}; color: {};", with_alpha(color, "20"), color)
}

/// `"+20%"`, `"-5%"`, `"0%"`.
pub fn signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{}%", value)
    } else {
        format!("{}%", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::dashboards::d105_predictions::{ForecastPoint, ForecastSummary, ModelInfo};

    fn point(day: u32, predicted: f64) -> ForecastPoint {
        ForecastPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            predicted_revenue: predicted,
            lower_bound: predicted - 20.0,
            upper_bound: predicted + 20.0,
            day_of_week: String::new(),
        }
    }

    fn forecast(predictions: Vec<ForecastPoint>, total: f64) -> SalesForecast {
        SalesForecast {
            predictions,
            summary: ForecastSummary { total_predicted_revenue: total, ..Default::default() },
            model_info: ModelInfo::default(),
        }
    }

    fn recommendation(id: &str, priority: Priority) -> Recommendation {
        Recommendation {
            id: id.to_string(),
            priority,
            category: "retention".to_string(),
            title: id.to_string(),
            description: String::new(),
            potential_impact: String::new(),
            action: String::new(),
        }
    }

    #[test]
    fn test_clamp_days() {
        assert_eq!(clamp_days(0), 7);
        assert_eq!(clamp_days(30), 30);
        assert_eq!(clamp_days(120), 90);
        assert!(FORECAST_DAY_OPTIONS.iter().all(|&d| clamp_days(d) == d));
    }

    #[test]
    fn test_forecast_chart_carries_band() {
        let chart = forecast_chart(&forecast(vec![point(1, 100.0), point(2, 200.0)], 300.0));
        assert_eq!(chart.labels.len(), 2);
        assert_eq!(chart.series[0].values, vec![100.0, 200.0]);
        let band = chart.band.unwrap();
        assert_eq!(band.lower, vec![80.0, 180.0]);
        assert_eq!(band.upper, vec![120.0, 220.0]);
    }

    #[test]
    fn test_avg_daily_revenue_guarded() {
        assert_eq!(avg_daily_revenue(&forecast(vec![point(1, 100.0), point(2, 200.0)], 300.0)), 150.0);
        assert_eq!(avg_daily_revenue(&forecast(Vec::new(), 300.0)), 0.0);
    }

    #[test]
    fn test_churn_chart_order() {
        let summary = ChurnSummary { at_risk_count: 12, high_risk_count: 4, total_revenue_at_risk: 0.0 };
        let chart = churn_chart(&summary);
        assert_eq!(chart[0].name, "Em Risco");
        assert_eq!(chart[1].name, "Alto Risco");
        assert_eq!(chart[1].value, 4.0);
        assert_eq!(customers_at_risk(&summary), 16);
    }

    #[test]
    fn test_recommendations_sorted_by_priority() {
        let sorted = sorted_recommendations(&[
            recommendation("a", Priority::Low),
            recommendation("b", Priority::High),
            recommendation("c", Priority::Medium),
            recommendation("d", Priority::High),
        ]);
        let ids: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_priority_colors() {
        assert_eq!(priority_color(Priority::High), "#ef4444");
        assert_eq!(priority_color(Priority::Low), "#10b981");
        assert_eq!(
            priority_badge_style(Priority::Medium),
            "background: #f59e0b20; color: #f59e0b;"
        );
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(signed_percent(20.0), "+20%");
        assert_eq!(signed_percent(-5.0), "-5%");
        assert_eq!(signed_percent(0.0), "0%");
    }
}
