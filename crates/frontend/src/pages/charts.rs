use crate::api::ApiClient;
use crate::shared::number_format::format_km;
use contracts::activities::MonthlySummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Monthly distance per sport
#[component]
pub fn ChartsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let (summary, set_summary) = signal(None::<MonthlySummary>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Load once on mount
    Effect::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            match client.fetch_monthly_totals().await {
                Ok(rows) => set_summary.set(Some(MonthlySummary::from_rows(&rows))),
                Err(e) => {
                    log::error!("Failed to load monthly totals: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="page page--charts">
            <h1>"Monthly totals"</h1>

            {move || loading.get().then(|| view! { <p class="status">"Loading..."</p> })}

            {move || {
                error.get().map(|err| view! {
                    <p class="status status--error">
                        <strong>"Error: "</strong>
                        {err}
                    </p>
                })
            }}

            {move || summary.get().map(|summary| render_summary(&summary))}
        </section>
    }
}

fn render_summary(summary: &MonthlySummary) -> AnyView {
    if summary.is_empty() {
        return view! {
            <p class="status">"No activities yet. Fetch them from the home page."</p>
        }
        .into_any();
    }

    let sports = &summary.sports;
    let sport_totals = summary.totals_by_sport();

    let header = sports
        .iter()
        .map(|sport| view! { <th>{sport.clone()}</th> })
        .collect_view();

    let rows = summary
        .months
        .iter()
        .map(|month| {
            let cells = sports
                .iter()
                .map(|sport| view! { <td class="num">{format_km(month.km_for(sport))}</td> })
                .collect_view();
            view! {
                <tr>
                    <td>{format!("{} {}", month.month_name, month.year)}</td>
                    {cells}
                    <td class="num total">{format_km(month.total_km)}</td>
                </tr>
            }
        })
        .collect_view();

    let footer = sports
        .iter()
        .map(|sport| {
            let km = sport_totals.get(sport).copied().unwrap_or(0.0);
            view! { <td class="num">{format_km(km)}</td> }
        })
        .collect_view();

    let years = summary
        .totals_by_year()
        .into_iter()
        .rev()
        .map(|(year, km)| view! { <li>{format!("{}: {} km", year, format_km(km))}</li> })
        .collect_view();

    view! {
        <ul class="year-totals">{years}</ul>
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Month"</th>
                    {header}
                    <th>"Total"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
            <tfoot>
                <tr>
                    <td>"Total"</td>
                    {footer}
                    <td class="num total">{format_km(summary.grand_total())}</td>
                </tr>
            </tfoot>
        </table>
    }
    .into_any()
}
