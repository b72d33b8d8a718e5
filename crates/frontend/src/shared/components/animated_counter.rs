//! Number that counts up from zero the first time it scrolls into view.

use crate::shared::formatters::{format_currency, format_number, format_roas};
use crate::shared::viewport::{ViewportTrigger, ViewportWatch};
use gloo_timers::future::TimeoutFuture;
use leptos::html::Span;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const FRAME_MS: u32 = 16;
pub const DEFAULT_DURATION_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterFormat {
    Currency,
    Number,
    Percent { decimals: usize },
    /// Return multiple, e.g. `3.25x`.
    Roas,
}

impl CounterFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            CounterFormat::Currency => format_currency(value),
            CounterFormat::Number => format_number(value.round()),
            CounterFormat::Percent { decimals } => format!("{:.*}%", decimals, value),
            CounterFormat::Roas => format_roas(value),
        }
    }
}

/// Decelerating curve: fast start, gentle landing.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Value shown `elapsed_ms` into an animation from `from` to `to`.
pub fn tween(from: f64, to: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return to;
    }
    from + (to - from) * ease_out_cubic(elapsed_ms / duration_ms)
}

#[component]
pub fn AnimatedCounter(
    #[prop(into)]
    value: Signal<f64>,
    format: CounterFormat,
    #[prop(optional)]
    duration_ms: Option<u32>,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let duration = f64::from(duration_ms.unwrap_or(DEFAULT_DURATION_MS));
    let node = NodeRef::<Span>::new();
    let displayed = RwSignal::new(0.0_f64);
    let in_view = RwSignal::new(false);
    // Bumped by every new animation so an older loop stops.
    let generation = StoredValue::new(0_u64);
    let watch = StoredValue::new_local(None::<ViewportWatch>);

    Effect::new(move |_| {
        let Some(element) = node.get() else {
            return;
        };
        if watch.with_value(Option::is_some) || in_view.get_untracked() {
            return;
        }
        let trigger = ViewportTrigger::subscribe(element.into());
        match trigger.on_enter_once(move || {
            in_view.try_set(true);
        }) {
            Ok(w) => watch.set_value(Some(w)),
            Err(err) => {
                log::warn!("viewport observer unavailable: {:?}", err);
                in_view.set(true);
            }
        }
    });

    Effect::new(move |_| {
        if !in_view.get() {
            return;
        }
        let target = value.get();
        let from = displayed.get_untracked();
        let run = generation.get_value() + 1;
        generation.set_value(run);

        spawn_local(async move {
            let started = js_sys::Date::now();
            loop {
                if generation.try_get_value() != Some(run) {
                    return;
                }
                let elapsed = js_sys::Date::now() - started;
                let current = tween(from, target, elapsed, duration);
                // Disposed: the counter was unmounted mid-animation.
                if displayed.try_set(current).is_some() {
                    return;
                }
                if elapsed >= duration {
                    return;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });

    view! {
        <span node_ref=node class=class>
            {move || format.render(displayed.get())}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_endpoints() {
        assert_eq!(tween(0.0, 100.0, 0.0, 2000.0), 0.0);
        assert_eq!(tween(0.0, 100.0, 2000.0, 2000.0), 100.0);
        assert_eq!(tween(0.0, 100.0, 5000.0, 2000.0), 100.0);
        assert_eq!(tween(10.0, 20.0, 1.0, 0.0), 20.0);
    }

    #[test]
    fn test_tween_decelerates() {
        let halfway = tween(0.0, 100.0, 1000.0, 2000.0);
        assert!(halfway > 50.0 && halfway < 100.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn test_counter_formats() {
        assert_eq!(CounterFormat::Currency.render(1234.5), "R$ 1.234,50");
        assert_eq!(CounterFormat::Number.render(1233.6), "1.234");
        assert_eq!(CounterFormat::Percent { decimals: 1 }.render(12.34), "12.3%");
        assert_eq!(CounterFormat::Roas.render(3.254), "3.25x");
    }
}
