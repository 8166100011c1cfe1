use crate::layout::Shell;
use crate::pages::{ChartsPage, HomePage, NotFoundPage, ReportsPage};
use crate::routes::table::AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

/// History-backed router over the static route table
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment(AppRoute::Home.def().segment()) view=HomePage />
                    <Route path=StaticSegment(AppRoute::Charts.def().segment()) view=ChartsPage />
                    <Route path=StaticSegment(AppRoute::Reports.def().segment()) view=ReportsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
