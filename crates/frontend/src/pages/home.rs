use crate::api::ApiClient;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Landing page with the Strava import trigger
#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let (busy, set_busy) = signal(false);
    let (result, set_result) = signal(None::<Result<u64, String>>);

    let on_fetch = move |_: ev::MouseEvent| {
        let client = client.clone();
        set_busy.set(true);
        set_result.set(None);

        spawn_local(async move {
            let outcome = match client.trigger_fetch().await {
                Ok(response) => {
                    log::info!("Imported {} activities", response.fetched);
                    Ok(response.fetched)
                }
                Err(e) => {
                    log::error!("Strava import failed: {}", e);
                    Err(e.to_string())
                }
            };
            set_result.set(Some(outcome));
            set_busy.set(false);
        });
    };

    view! {
        <section class="page page--home">
            <h1>"Strava Stats"</h1>
            <p>"Monthly distance totals and bike commute reports built from your Strava activities."</p>

            <button class="button button--primary" on:click=on_fetch disabled=move || busy.get()>
                {move || if busy.get() { "Fetching..." } else { "Fetch from Strava" }}
            </button>

            {move || {
                result.get().map(|outcome| match outcome {
                    Ok(count) => view! {
                        <p class="status status--ok">{format!("Fetched {} activities", count)}</p>
                    }.into_any(),
                    Err(err) => view! {
                        <p class="status status--error">
                            <strong>"Error: "</strong>
                            {err}
                        </p>
                    }.into_any(),
                })
            }}
        </section>
    }
}
