use crate::routes::table::AppRoute;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page page--not-found">
            <h1>"Page not found"</h1>
            <A href=AppRoute::Home.def().path>"Back to home"</A>
        </section>
    }
}
