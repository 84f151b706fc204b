//! PDF export trigger.

use leptos::prelude::*;

use crate::state::plan::PlanState;

/// Download button for the stored plan.
///
/// With no stored plan this alerts and never touches the network.
/// Otherwise it POSTs the result verbatim to `/download_pdf` and saves
/// the returned bytes as `construction_plan.pdf`. Failures are logged
/// with no user feedback.
#[component]
pub fn DownloadButton() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();

    let on_click = move |_| {
        let Some(result) = plan.get().result else {
            #[cfg(feature = "hydrate")]
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Generate a plan first!");
            }
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::download_pdf(&result).await {
                Ok(bytes) => {
                    if let Err(e) = crate::util::download::save_bytes_as(
                        &bytes,
                        crate::util::download::PDF_FILENAME,
                    ) {
                        log::error!("pdf save failed: {e}");
                    }
                }
                Err(e) => log::error!("pdf request failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = result;
    };

    view! {
        <button class="btn btn--secondary download-button" on:click=on_click>
            "Download PDF"
        </button>
    }
}
