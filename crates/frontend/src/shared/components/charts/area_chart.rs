use crate::shared::chart::{area_path, axis_label_indices, band_path, line_path, max_value, plot_points};
use crate::shared::colors::with_alpha;
use crate::shared::formatters::format_compact;
use leptos::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 220.0;
const AXIS_LABELS: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct AreaSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Shaded interval drawn behind the series, e.g. forecast bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBand {
    pub color: &'static str,
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaChartData {
    /// One x-axis label per point, already formatted.
    pub labels: Vec<String>,
    pub series: Vec<AreaSeries>,
    pub band: Option<ConfidenceBand>,
}

impl AreaChartData {
    /// Shared y scale: every series and the band's upper edge.
    pub fn max(&self) -> f64 {
        let series = self.series.iter().flat_map(|s| s.values.iter().copied());
        let band = self.band.iter().flat_map(|b| b.upper.iter().copied());
        max_value(series.chain(band))
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.values.is_empty())
    }
}

/// Filled line chart over a shared x axis.
#[component]
pub fn AreaChart(#[prop(into)] data: Signal<AreaChartData>) -> impl IntoView {
    view! {
        <div class="area-chart">
            {move || {
                let chart = data.get();
                if chart.is_empty() {
                    return view! { <div class="chart-empty">"Sem dados para o período"</div> }.into_any();
                }
                let max = chart.max();

                let band = chart.band.as_ref().map(|band| {
                    let lower = plot_points(&band.lower, WIDTH, HEIGHT, max);
                    let upper = plot_points(&band.upper, WIDTH, HEIGHT, max);
                    view! { <path d=band_path(&lower, &upper) fill=with_alpha(band.color, "26") stroke="none" /> }
                });

                let series = chart
                    .series
                    .iter()
                    .map(|s| {
                        let points = plot_points(&s.values, WIDTH, HEIGHT, max);
                        view! {
                            <g>
                                <path d=area_path(&points, HEIGHT) fill=with_alpha(s.color, "33") stroke="none" />
                                <path d=line_path(&points) fill="none" stroke=s.color stroke-width="2" />
                            </g>
                        }
                    })
                    .collect_view();

                let labels = axis_label_indices(chart.labels.len(), AXIS_LABELS)
                    .into_iter()
                    .filter_map(|i| chart.labels.get(i).cloned())
                    .map(|label| view! { <span class="area-chart__tick">{label}</span> })
                    .collect_view();

                let legend = (chart.series.len() > 1).then(|| {
                    chart
                        .series
                        .iter()
                        .map(|s| {
                            let swatch = format!("background: {};", s.color);
                            view! {
                                <span class="chart-legend__item">
                                    <span class="chart-legend__swatch" style=swatch></span>
                                    {s.name.clone()}
                                </span>
                            }
                        })
                        .collect_view()
                });

                let scale = [max, max / 2.0, 0.0]
                    .into_iter()
                    .map(|v| view! { <span class="area-chart__scale-tick">{format_compact(v)}</span> })
                    .collect_view();

                view! {
                    <div class="area-chart__scale">{scale}</div>
                    <svg
                        viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
                        preserveAspectRatio="none"
                        class="area-chart__svg"
                        role="img"
                    >
                        {band}
                        {series}
                    </svg>
                    <div class="area-chart__axis">{labels}</div>
                    <div class="chart-legend chart-legend--inline">{legend}</div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_includes_band() {
        let data = AreaChartData {
            labels: vec!["a".into(), "b".into()],
            series: vec![AreaSeries { name: "Receita".into(), color: "#6366f1", values: vec![10.0, 20.0] }],
            band: Some(ConfidenceBand { color: "#6366f1", lower: vec![5.0, 15.0], upper: vec![15.0, 32.0] }),
        };
        assert_eq!(data.max(), 32.0);
        assert!(!data.is_empty());
        assert!(AreaChartData::default().is_empty());
    }
}
