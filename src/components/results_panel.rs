//! Results panel: renders the selected view of the stored plan.

use leptos::prelude::*;

use crate::state::plan::PlanState;
use crate::util::views::{
    NO_DATA_MESSAGE, NO_PLAN_MESSAGE, ViewContent, ViewRequest, view_content,
};

/// Renders the active view's content model. The panel's entire content
/// is rebuilt on every selection or result change; before the first
/// selection it shows a neutral hint.
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();

    view! {
        <section class="results-panel">
            {move || {
                let state = plan.get();
                let Some(view) = state.active_view else {
                    return view! {
                        <p class="results-panel__hint">"Run an analysis, then pick a view."</p>
                    }
                        .into_any();
                };
                let content = view_content(
                    state.result.as_ref(),
                    ViewRequest::Known(view),
                    timestamp_ms(),
                );
                render_content(content)
            }}
        </section>
    }
}

/// Wall-clock milliseconds used to cache-bust blueprint image URLs.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timestamp_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(feature = "hydrate"))]
fn timestamp_ms() -> u64 {
    0
}

fn render_content(content: ViewContent) -> AnyView {
    match content {
        ViewContent::NoPlan => view! {
            <p class="results-panel__empty">{NO_PLAN_MESSAGE}</p>
        }
        .into_any(),
        ViewContent::NoData => view! {
            <p class="results-panel__empty">{NO_DATA_MESSAGE}</p>
        }
        .into_any(),
        ViewContent::OrderedList { title, items } => view! {
            <h3>{title}</h3>
            <ol class="results-panel__list">
                {items
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ol>
        }
        .into_any(),
        ViewContent::Paragraphs { title, prefix, items } => view! {
            <h3>{title}</h3>
            {items
                .into_iter()
                .map(|item| view! { <p class="results-panel__line">{format!("{prefix} {item}")}</p> })
                .collect::<Vec<_>>()}
        }
        .into_any(),
        ViewContent::LabeledRows { title, rows } => view! {
            <h3>{title}</h3>
            {rows
                .into_iter()
                .map(|(label, value)| {
                    view! { <p class="results-panel__row">{format!("{label}: {value}")}</p> }
                })
                .collect::<Vec<_>>()}
        }
        .into_any(),
        ViewContent::Blueprints { title, floors } => view! {
            <h3>{title}</h3>
            {floors
                .into_iter()
                .map(|(floor, url)| {
                    view! {
                        <h4 class="results-panel__floor">{floor.clone()}</h4>
                        <img class="results-panel__blueprint" src=url alt=floor/>
                    }
                })
                .collect::<Vec<_>>()}
        }
        .into_any(),
    }
}
