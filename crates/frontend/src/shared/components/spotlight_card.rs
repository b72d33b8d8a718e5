//! Card with a radial highlight that follows the pointer.

use leptos::html::Div;
use leptos::prelude::*;
use web_sys::MouseEvent;

const DEFAULT_SPOTLIGHT: &str = "rgba(99, 102, 241, 0.15)";
const DEFAULT_SIZE_PX: u32 = 300;

/// Pointer offset inside an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Resting position used before the first move and after leaving.
    pub const NEUTRAL: PointerPosition = PointerPosition { x: 0.0, y: 0.0 };

    /// Viewport coordinates translated into the box whose top-left corner
    /// is at (`left`, `top`).
    pub fn relative_to(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self {
            x: client_x - left,
            y: client_y - top,
        }
    }

    pub fn gradient(&self, size_px: u32, color: &str) -> String {
        format!(
            "background: radial-gradient({}px circle at {:.0}px {:.0}px, {}, transparent 70%);",
            size_px, self.x, self.y, color
        )
    }
}

#[component]
pub fn SpotlightCard(
    #[prop(optional)]
    class: &'static str,
    #[prop(optional)]
    color: Option<&'static str>,
    #[prop(optional)]
    size_px: Option<u32>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let position = RwSignal::new(PointerPosition::NEUTRAL);
    let hovered = RwSignal::new(false);
    let color = color.unwrap_or(DEFAULT_SPOTLIGHT);
    let size_px = size_px.unwrap_or(DEFAULT_SIZE_PX);

    let on_move = move |ev: MouseEvent| {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        position.set(PointerPosition::relative_to(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            rect.left(),
            rect.top(),
        ));
    };

    let on_leave = move |_: MouseEvent| {
        hovered.set(false);
        position.set(PointerPosition::NEUTRAL);
    };

    let overlay_style = move || {
        let opacity = if hovered.get() { 1 } else { 0 };
        format!("{} opacity: {};", position.get().gradient(size_px, color), opacity)
    };

    view! {
        <div
            node_ref=node
            class=format!("spotlight-card {}", class)
            on:mousemove=on_move
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=on_leave
        >
            <div class="spotlight-card__overlay" style=overlay_style></div>
            <div class="spotlight-card__content">{children()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_position() {
        let p = PointerPosition::relative_to(150.0, 80.0, 100.0, 50.0);
        assert_eq!(p, PointerPosition { x: 50.0, y: 30.0 });
    }

    #[test]
    fn test_gradient_style() {
        let style = PointerPosition { x: 12.4, y: 7.6 }.gradient(300, "red");
        assert_eq!(style, "background: radial-gradient(300px circle at 12px 8px, red, transparent 70%);");
        assert_eq!(PointerPosition::default(), PointerPosition::NEUTRAL);
    }
}
