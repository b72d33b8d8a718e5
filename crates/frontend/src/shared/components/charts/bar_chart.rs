use crate::shared::chart::{bar_fraction, max_value, ChartDatum};
use crate::shared::components::animated_counter::CounterFormat;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarOrientation {
    #[default]
    Horizontal,
    Vertical,
}

fn bar_style(orientation: BarOrientation, fraction: f64, color: &str) -> String {
    let pct = fraction * 100.0;
    match orientation {
        BarOrientation::Horizontal => format!("width: {:.1}%; background: {};", pct, color),
        BarOrientation::Vertical => format!("height: {:.1}%; background: {};", pct, color),
    }
}

/// Bars scaled against the largest value. Negative values draw as empty
/// bars but keep their label.
#[component]
pub fn BarChart(
    #[prop(into)]
    data: Signal<Vec<ChartDatum>>,
    format: CounterFormat,
    #[prop(optional)]
    orientation: BarOrientation,
    #[prop(optional)]
    height_px: Option<u32>,
) -> impl IntoView {
    let class = match orientation {
        BarOrientation::Horizontal => "bar-chart bar-chart--horizontal",
        BarOrientation::Vertical => "bar-chart bar-chart--vertical",
    };
    let style = height_px.map(|h| format!("height: {}px;", h)).unwrap_or_default();

    view! {
        <div class=class style=style>
            {move || {
                let items = data.get();
                if items.is_empty() {
                    return view! { <div class="chart-empty">"Sem dados para o período"</div> }.into_any();
                }
                let max = max_value(items.iter().map(|d| d.value));
                items
                    .into_iter()
                    .map(|d| {
                        let fill = bar_style(orientation, bar_fraction(d.value, max), d.color);
                        view! {
                            <div class="bar-chart__row" title=d.name.clone()>
                                <span class="bar-chart__label">{d.name.clone()}</span>
                                <div class="bar-chart__track">
                                    <div class="bar-chart__bar" style=fill></div>
                                </div>
                                <span class="bar-chart__value">{format.render(d.value)}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_style() {
        assert_eq!(
            bar_style(BarOrientation::Horizontal, 0.5, "#6366f1"),
            "width: 50.0%; background: #6366f1;"
        );
        assert_eq!(
            bar_style(BarOrientation::Vertical, 1.0, "#10b981"),
            "height: 100.0%; background: #10b981;"
        );
    }
}
