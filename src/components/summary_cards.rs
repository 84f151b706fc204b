//! Headline figure cards: timeline, budget, workers, unit cost.

use leptos::prelude::*;

use crate::state::plan::PlanState;

/// Four read-only cards fed by the stored plan; em-dash placeholders
/// before the first analysis resolves.
#[component]
pub fn SummaryCards() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();

    view! {
        <div class="summary-cards">
            {move || {
                let summary = plan.get().summary();
                vec![
                    ("Timeline", summary.timeline),
                    ("Estimated Budget", summary.estimated_budget),
                    ("Workers", summary.workers),
                    ("Cost per Yard", summary.cost_per_yard),
                ]
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="summary-cards__card">
                                <span class="summary-cards__label">{label}</span>
                                <span class="summary-cards__value">{value}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
