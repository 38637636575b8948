use crate::components::loading::LoadingView;
use crate::core::config::ShellConfig;
use crate::services::data;
use serde::Deserialize;
use std::rc::Rc;
use yew::prelude::*;

const SUMMARY_PATH: &str = "portfolio/summary";

#[derive(Clone, Debug, PartialEq, Deserialize)]
struct PortfolioSummary {
    total_value: f64,
    day_change_pct: f64,
    open_positions: u32,
    #[serde(default)]
    sample: bool,
}

impl PortfolioSummary {
    const fn sample() -> Self {
        Self {
            total_value: 12_480.5,
            day_change_pct: 1.2,
            open_positions: 7,
            sample: true,
        }
    }
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let config = use_context::<Rc<ShellConfig>>().unwrap_or_default();
    let summary = use_state(|| None::<PortfolioSummary>);

    {
        let summary = summary.clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    let loaded = data::load_or_report::<PortfolioSummary>(&config, SUMMARY_PATH)
                        .await
                        .unwrap_or_else(PortfolioSummary::sample);
                    summary.set(Some(loaded));
                });
                || ()
            },
            (),
        );
    }

    let Some(summary) = (*summary).clone() else {
        return html! { <LoadingView label="Loading portfolio…" /> };
    };

    html! {
        <section class="grid gap-4">
            <h1 class="text-2xl font-semibold">{"Dashboard"}</h1>
            if summary.sample {
                <span class="badge badge-outline">{"Sample data"}</span>
            }
            <div class="stats shadow">
                <div class="stat">
                    <div class="stat-title">{"Total value"}</div>
                    <div class="stat-value">{format!("${:.2}", summary.total_value)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Today"}</div>
                    <div class="stat-value">{format!("{:+.2}%", summary.day_change_pct)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Open positions"}</div>
                    <div class="stat-value">{summary.open_positions}</div>
                </div>
            </div>
        </section>
    }
}
