use crate::routes::table::ROUTES;
use leptos::prelude::*;
use leptos_router::components::A;

/// Application shell: navigation bar over the routed page.
///
/// ```text
/// +------------------------------------------+
/// |  Strava Stats   Home  Charts  Reports    |
/// +------------------------------------------+
/// |                 page                     |
/// +------------------------------------------+
/// ```
///
/// Links come from the route table, so every route has exactly one entry.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-header__title">"Strava Stats"</span>
                <nav class="app-header__nav">
                    {ROUTES
                        .iter()
                        .map(|def| view! { <A href=def.path>{def.name}</A> })
                        .collect_view()}
                </nav>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
