use crate::api::ApiClient;
use crate::shared::date_utils::format_date_range;
use contracts::activities::{CommuteMonth, ReportPeriod};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Commute reporting periods with spreadsheet downloads
#[component]
pub fn ReportsPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let (months, set_months) = signal(None::<Vec<CommuteMonth>>);
    let (error, set_error) = signal(None::<String>);
    // Period currently being downloaded, if any
    let (downloading, set_downloading) = signal(None::<(i32, u32)>);

    Effect::new(move |_| {
        let client = client.get_value();
        spawn_local(async move {
            match client.fetch_commute_months().await {
                Ok(list) => set_months.set(Some(list)),
                Err(e) => {
                    log::error!("Failed to load commute months: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    });

    let download = move |year: i32, month: u32| {
        let client = client.get_value();
        set_error.set(None);
        set_downloading.set(Some((year, month)));

        spawn_local(async move {
            if let Err(e) = client.download_report(year, month).await {
                log::error!("Report download for {}-{:02} failed: {}", year, month, e);
                set_error.set(Some(e.to_string()));
            }
            set_downloading.set(None);
        });
    };

    view! {
        <section class="page page--reports">
            <h1>"Commute reports"</h1>
            <p>"Each period runs from the 21st of the previous month to the 20th."</p>

            {move || {
                error.get().map(|err| view! {
                    <p class="status status--error">
                        <strong>"Error: "</strong>
                        {err}
                    </p>
                })
            }}

            {move || match months.get() {
                None => view! { <p class="status">"Loading..."</p> }.into_any(),
                Some(list) if list.is_empty() => {
                    view! { <p class="status">"No commutes found."</p> }.into_any()
                }
                Some(list) => {
                    let rows = list
                        .into_iter()
                        .map(|item| {
                            let (year, month) = (item.year, item.month);
                            let busy = move || downloading.get() == Some((year, month));
                            view! {
                                <tr>
                                    <td>{item.label}</td>
                                    <td>{period_dates(year, month)}</td>
                                    <td>
                                        <button
                                            class="button"
                                            disabled=busy
                                            on:click=move |_| download(year, month)
                                        >
                                            {move || if busy() { "Downloading..." } else { "Download" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view();

                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Period"</th>
                                    <th>"Dates"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

/// "21.02.2024 - 20.03.2024", empty for a period the backend should never send
fn period_dates(year: i32, month: u32) -> String {
    let bounds = ReportPeriod::new(year, month)
        .and_then(|period| Ok((period.start_date()?, period.end_date()?)));
    match bounds {
        Ok((start, end)) => format_date_range(start, end),
        Err(_) => String::new(),
    }
}
