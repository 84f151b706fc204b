//! View selector buttons for the results panel.

use leptos::prelude::*;

use crate::state::plan::PlanState;
use crate::util::form_schema::FormVariant;
use crate::util::views::PlanView;

/// One button per selectable view; the blueprint button only appears
/// for the extended form variant. Clicking stores the selection in
/// `PlanState`; the results panel re-renders from it.
#[component]
pub fn FilterBar(variant: FormVariant) -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();

    view! {
        <div class="filter-bar">
            {PlanView::for_variant(variant)
                .iter()
                .copied()
                .map(|v| {
                    let active = move || plan.get().active_view == Some(v);
                    view! {
                        <button
                            class="filter-bar__button"
                            class:filter-bar__button--active=active
                            data-view=v.key()
                            on:click=move |_| plan.update(|p| p.active_view = Some(v))
                        >
                            {v.title()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
