use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One client for the whole app, built from the startup configuration
    let config = AppConfig::load();
    provide_context(ApiClient::new(&config));

    view! {
        <AppRoutes />
    }
}
