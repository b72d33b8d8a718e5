use crate::shared::components::card_animated::appear_style;
use crate::shared::components::skeleton::Skeleton;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Tone of a [`StatCard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl StatTone {
    pub fn class(&self) -> &'static str {
        match self {
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Bad => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Neutral => "stat-card",
        }
    }
}

/// Small secondary metric. The value arrives already formatted;
/// `None` shows a placeholder line.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.into_any(),
        None => view! { <Skeleton height="1.5rem" width="50%" /> }.into_any(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class=tone.class() style=appear_style(delay_ms, "")>
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">{formatted}</div>
            {subtitle_view}
        </div>
    }
}
