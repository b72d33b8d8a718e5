use crate::shared::icons::icon;
use contracts::dashboards::d100_overview::{Alert, AlertKind};
use leptos::prelude::*;

fn kind_class(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Danger => "alert-card alert-card--danger",
        AlertKind::Warning => "alert-card alert-card--warning",
        AlertKind::Info => "alert-card alert-card--info",
    }
}

fn kind_icon(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Danger => "alert-circle",
        AlertKind::Warning => "alert-triangle",
        AlertKind::Info => "info",
    }
}

/// `"Variação: +12.5%"`
pub fn variation_label(change_percent: f64) -> String {
    let sign = if change_percent > 0.0 { "+" } else { "" };
    format!("Variação: {}{:.1}%", sign, change_percent)
}

/// Most severe kind among `alerts`; drives the color of the header badge.
pub fn highest_severity(alerts: &[Alert]) -> Option<AlertKind> {
    alerts.iter().map(|a| a.kind).max_by_key(AlertKind::severity)
}

pub fn badge_class(kind: Option<AlertKind>) -> &'static str {
    match kind {
        Some(AlertKind::Danger) => "alert-badge alert-badge--danger",
        Some(AlertKind::Warning) => "alert-badge alert-badge--warning",
        _ => "alert-badge alert-badge--info",
    }
}

#[component]
pub fn AlertCard(
    alert: Alert,
    #[prop(optional)]
    on_dismiss: Option<Callback<String>>,
) -> impl IntoView {
    let id = alert.id.clone();

    view! {
        <div class=kind_class(alert.kind)>
            <span class="alert-card__icon">{icon(kind_icon(alert.kind))}</span>
            <div class="alert-card__body">
                <h4 class="alert-card__title">{alert.title.clone()}</h4>
                <p class="alert-card__message">{alert.message.clone()}</p>
                {alert.change_percent.map(|pct| view! {
                    <p class="alert-card__change">{variation_label(pct)}</p>
                })}
            </div>
            {on_dismiss.map(|cb| view! {
                <button class="alert-card__dismiss" title="Dispensar" on:click=move |_| cb.run(id.clone())>
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

#[component]
pub fn AlertsList(
    #[prop(into)]
    alerts: Signal<Vec<Alert>>,
    #[prop(optional)]
    on_dismiss: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="alerts-list">
            {move || {
                alerts
                    .get()
                    .into_iter()
                    .map(|alert| match on_dismiss {
                        Some(cb) => view! { <AlertCard alert=alert on_dismiss=cb /> }.into_any(),
                        None => view! { <AlertCard alert=alert /> }.into_any(),
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, kind: AlertKind) -> Alert {
        Alert {
            id: id.to_string(),
            kind,
            title: "Queda de receita".to_string(),
            message: String::new(),
            metric: "revenue".to_string(),
            current_value: 0.0,
            threshold: 0.0,
            change_percent: None,
            created_at: String::new(),
        }
    }

    #[test]
    fn test_highest_severity() {
        let alerts = vec![alert("a", AlertKind::Info), alert("b", AlertKind::Danger), alert("c", AlertKind::Warning)];
        assert_eq!(highest_severity(&alerts), Some(AlertKind::Danger));
        assert_eq!(highest_severity(&alerts[..1]), Some(AlertKind::Info));
        assert_eq!(highest_severity(&[]), None);
        assert_eq!(badge_class(Some(AlertKind::Warning)), "alert-badge alert-badge--warning");
    }

    #[test]
    fn test_variation_label() {
        assert_eq!(variation_label(12.46), "Variação: +12.5%");
        assert_eq!(variation_label(-3.0), "Variação: -3.0%");
    }
}
