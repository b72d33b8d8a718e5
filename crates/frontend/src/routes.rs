use crate::dashboards::{
    CustomersDashboard, MarketingDashboard, OverviewDashboard, PredictionsDashboard,
    ProductsDashboard, SalesDashboard,
};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/" /> }>
                <Route path=path!("/") view=OverviewDashboard />
                <Route path=path!("/sales") view=SalesDashboard />
                <Route path=path!("/customers") view=CustomersDashboard />
                <Route path=path!("/products") view=ProductsDashboard />
                <Route path=path!("/marketing") view=MarketingDashboard />
                <Route path=path!("/predictions") view=PredictionsDashboard />
            </Routes>
        </Router>
    }
}
