use crate::shared::chart::{donut_slices, ChartDatum, Point};
use crate::shared::components::animated_counter::CounterFormat;
use crate::shared::formatters::format_percent;
use leptos::prelude::*;

const SIZE: f64 = 200.0;
const OUTER: f64 = 90.0;
const INNER: f64 = 58.0;

/// Ring chart with a legend showing each slice's share.
#[component]
pub fn DonutChart(
    #[prop(into)]
    data: Signal<Vec<ChartDatum>>,
    format: CounterFormat,
    /// Text in the hole, e.g. the total.
    #[prop(optional, into)]
    center_label: MaybeProp<String>,
) -> impl IntoView {
    let center = Point { x: SIZE / 2.0, y: SIZE / 2.0 };
    let slices = Memo::new(move |_| data.with(|d| donut_slices(d, center, OUTER, INNER)));

    view! {
        <div class="donut-chart">
            <Show
                when=move || slices.with(|s| !s.is_empty())
                fallback=|| view! { <div class="chart-empty">"Sem dados para o período"</div> }
            >
                <div class="donut-chart__figure">
                    <svg viewBox=format!("0 0 {} {}", SIZE, SIZE) class="donut-chart__svg" role="img">
                        {move || {
                            slices
                                .get()
                                .into_iter()
                                .map(|slice| {
                                    view! {
                                        <path d=slice.path fill=slice.color class="donut-chart__slice" />
                                    }
                                })
                                .collect_view()
                        }}
                    </svg>
                    <span class="donut-chart__center">{move || center_label.get()}</span>
                </div>
                <ul class="chart-legend">
                    {move || {
                        slices
                            .get()
                            .into_iter()
                            .map(|slice| {
                                let swatch = format!("background: {};", slice.color);
                                view! {
                                    <li class="chart-legend__item">
                                        <span class="chart-legend__swatch" style=swatch></span>
                                        <span class="chart-legend__name">{slice.name}</span>
                                        <span class="chart-legend__value">{format.render(slice.value)}</span>
                                        <span class="chart-legend__share">{format_percent(slice.percent, 1)}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
