//! Left navigation between the dashboard pages.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: [NavItem; 6] = [
    NavItem { href: "/", label: "Dashboard", icon: "dashboard" },
    NavItem { href: "/sales", label: "Vendas", icon: "sales" },
    NavItem { href: "/customers", label: "Clientes", icon: "customers" },
    NavItem { href: "/products", label: "Produtos", icon: "products" },
    NavItem { href: "/marketing", label: "Marketing", icon: "marketing" },
    NavItem { href: "/predictions", label: "Predições", icon: "predictions" },
];

/// `/` only matches itself; other entries also match their sub-paths.
fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/" || pathname.is_empty();
    }
    pathname == href || pathname.starts_with(&format!("{}/", href))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();

    view! {
        <aside
            class="sidebar"
            class:sidebar--collapsed=move || ctx.sidebar_collapsed.get()
        >
            <div class="sidebar__brand">
                <span class="sidebar__logo">"C"</span>
                <span class="sidebar__name">"Cortex Analytics"</span>
                <button
                    class="sidebar__toggle"
                    title="Recolher menu"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
            </div>
            <nav class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        let active = move || location.pathname.with(|path| is_active(path, item.href));
                        view! {
                            <A href=item.href attr:class="sidebar__item" attr:title=item.label>
                                <span
                                    class="sidebar__item-inner"
                                    class:sidebar__item--active=active
                                >
                                    <span class="sidebar__icon">{icon(item.icon)}</span>
                                    <span class="sidebar__label">{item.label}</span>
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_exact() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/sales", "/"));
    }

    #[test]
    fn test_section_matches_subpaths() {
        assert!(is_active("/customers", "/customers"));
        assert!(is_active("/customers/42", "/customers"));
        assert!(!is_active("/customers-old", "/customers"));
    }
}
