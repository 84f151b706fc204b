//! Analysis form: field controls, inline land-image preview, and the
//! multipart submit to `/analyze`.

use leptos::prelude::*;

use crate::state::plan::PlanState;
use crate::util::form_schema::{FieldKind, FormField, FormVariant};

/// The analysis form plus preview pane.
///
/// Submitting packages the whole form with `FormData` (values verbatim,
/// no client-side validation) and replaces the stored plan wholesale on
/// success. A failed request only logs; prior display state persists.
/// Double submission is allowed — the later-resolving response wins.
#[component]
pub fn AnalysisForm(variant: FormVariant) -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();
    let preview_src = RwSignal::new(None::<String>);
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            crate::util::preview::load_preview(&file, move |url| {
                preview_src.set(Some(url));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let Some(form) = form_ref.get() else {
                return;
            };
            let Ok(data) = web_sys::FormData::new_with_form(&form) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::submit_analysis(data).await {
                    Ok(result) => plan.update(|p| p.replace(result)),
                    Err(e) => log::error!("analysis request failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &plan;
            let _ = &form_ref;
        }
    };

    view! {
        <form class="analysis-form" node_ref=form_ref on:submit=on_submit>
            <div class="analysis-form__fields">
                {variant
                    .fields()
                    .iter()
                    .map(|field| field_control(field, on_file_change))
                    .collect::<Vec<_>>()}
            </div>

            <div class="analysis-form__preview">
                {move || match preview_src.get() {
                    Some(src) => view! {
                        <img class="analysis-form__preview-img" src=src alt="Land preview"/>
                    }
                        .into_any(),
                    None => view! {
                        <span class="analysis-form__preview-hint">"No image selected"</span>
                    }
                        .into_any(),
                }}
            </div>

            <button class="btn btn--primary analysis-form__submit" type="submit">
                "Generate Plan"
            </button>
        </form>
    }
}

/// Render one schema field as a labeled control. The control's `name`
/// attribute is the multipart field name, so `FormData::new_with_form`
/// captures the whole schema without per-field wiring.
fn field_control(
    field: &FormField,
    on_file_change: impl Fn(leptos::ev::Event) + Copy + 'static,
) -> impl IntoView {
    let label = field.label;
    let name = field.name;

    let control = match field.kind {
        FieldKind::Text => view! {
            <input class="analysis-form__input" type="text" name=name id=name/>
        }
        .into_any(),
        FieldKind::Number => view! {
            <input class="analysis-form__input" type="number" step="any" name=name id=name/>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select class="analysis-form__select" name=name id=name>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{*opt}</option> })
                    .collect::<Vec<_>>()}
            </select>
        }
        .into_any(),
        FieldKind::File => view! {
            <input
                class="analysis-form__file"
                type="file"
                accept="image/*"
                name=name
                id=name
                on:change=on_file_change
            />
        }
        .into_any(),
    };

    view! {
        <label class="analysis-form__field" for=name>
            <span class="analysis-form__label">{label}</span>
            {control}
        </label>
    }
}
