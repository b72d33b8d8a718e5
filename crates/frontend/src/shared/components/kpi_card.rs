use crate::shared::api_utils::ApiError;
use crate::shared::components::animated_counter::{AnimatedCounter, CounterFormat};
use crate::shared::components::query_error::QueryErrorView;
use crate::shared::components::skeleton::Skeleton;
use crate::shared::components::spotlight_card::SpotlightCard;
use crate::shared::formatters::change_direction;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// What the value slot of a KPI card shows.
#[derive(Debug, Clone, PartialEq)]
pub enum KpiState {
    Loading,
    Ready,
    Failed(ApiError),
}

/// A value already on screen stays there even if a later refetch failed.
pub fn kpi_state(has_value: bool, error: Option<ApiError>) -> KpiState {
    match (has_value, error) {
        (true, _) => KpiState::Ready,
        (false, Some(error)) => KpiState::Failed(error),
        (false, None) => KpiState::Loading,
    }
}

/// Headline metric with an animated value and the change against the
/// previous period. `value = None` renders a skeleton, or the error with a
/// retry button once `error` is set.
#[component]
pub fn KpiCard(
    #[prop(into)]
    title: String,
    /// Name understood by `icon()`
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: CounterFormat,
    #[prop(into, optional)]
    change: Signal<Option<f64>>,
    #[prop(optional, into)]
    change_label: Option<String>,
    #[prop(optional)]
    delay_ms: u32,
    #[prop(into, optional)]
    error: Signal<Option<ApiError>>,
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    let state = Memo::new(move |_| kpi_state(value.with(Option::is_some), error.get()));
    let change_label = change_label.unwrap_or_else(|| "vs período anterior".to_string());

    let change_view = move || {
        change.get().map(|pct| {
            let direction = change_direction(pct);
            let text = format!("{} {:.1}%", direction.arrow(), pct.abs());
            let label = change_label.clone();
            view! {
                <div class="kpi-card__change">
                    <span class=direction.css_class()>{text}</span>
                    <span class="kpi-card__change-label">{label}</span>
                </div>
            }
        })
    };

    view! {
        <div class="kpi-card" style=format!("animation: card-appear 0.5s ease-out {}ms both;", delay_ms)>
            <SpotlightCard class="kpi-card__body">
                <div class="kpi-card__header">
                    <h3 class="kpi-card__title">{title}</h3>
                    <div class="kpi-card__icon">{icon(icon_name)}</div>
                </div>
                <div class="kpi-card__value">
                    {move || match state.get() {
                        KpiState::Ready => view! {
                            <AnimatedCounter
                                value=Signal::derive(move || value.get().unwrap_or(0.0))
                                format=format
                            />
                        }
                        .into_any(),
                        KpiState::Failed(error) => {
                            let on_retry = on_retry.unwrap_or_else(|| Callback::new(|_| {}));
                            view! { <QueryErrorView error=error on_retry=on_retry /> }.into_any()
                        }
                        KpiState::Loading => view! { <Skeleton height="2rem" width="60%" /> }.into_any(),
                    }}
                </div>
                {change_view}
            </SpotlightCard>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_kpi_shows_error() {
        let error = ApiError::Http { status: 500, message: "boom".to_string() };
        assert_eq!(kpi_state(false, Some(error.clone())), KpiState::Failed(error));
        assert_eq!(kpi_state(false, None), KpiState::Loading);
    }

    #[test]
    fn test_kpi_keeps_value_after_failed_refetch() {
        let error = ApiError::Network("offline".to_string());
        assert_eq!(kpi_state(true, Some(error)), KpiState::Ready);
        assert_eq!(kpi_state(true, None), KpiState::Ready);
    }
}
