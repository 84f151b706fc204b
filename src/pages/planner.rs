//! Planner page: form on the left, results on the right, chat floating.

use leptos::prelude::*;

use crate::components::analysis_form::AnalysisForm;
use crate::components::chat_widget::ChatWidget;
use crate::components::download_button::DownloadButton;
use crate::components::filter_bar::FilterBar;
use crate::components::results_panel::ResultsPanel;
use crate::components::summary_cards::SummaryCards;
use crate::util::form_schema::FormVariant;

/// Form revision this deployment ships with. The standard variant stays
/// selectable for backends without room counts or blueprints.
const FORM_VARIANT: FormVariant = FormVariant::Extended;

/// The single route-level page.
#[component]
pub fn PlannerPage() -> impl IntoView {
    view! {
        <div class="planner-page">
            <header class="planner-page__header">
                <h1>"SitePlan"</h1>
                <DownloadButton/>
            </header>

            <div class="planner-page__layout">
                <AnalysisForm variant=FORM_VARIANT/>

                <section class="planner-page__results">
                    <SummaryCards/>
                    <FilterBar variant=FORM_VARIANT/>
                    <ResultsPanel/>
                </section>
            </div>

            <ChatWidget/>
        </div>
    }
}
