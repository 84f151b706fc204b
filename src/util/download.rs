//! Browser file download via a temporary object URL.
//!
//! Wraps response bytes in a `Blob`, mints an object URL, and drives a
//! synthetic anchor click so the browser saves the payload under a
//! fixed filename. The anchor and URL are released before returning.

/// Filename used for exported construction plans.
pub const PDF_FILENAME: &str = "construction_plan.pdf";

/// Save `bytes` as a local file download named `filename`.
///
/// # Errors
///
/// Returns an error string if the blob, object URL, or anchor element
/// cannot be created. The payload's content type is not verified.
#[cfg(feature = "hydrate")]
pub fn save_bytes_as(bytes: &[u8], filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "not an anchor element".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or_else(|| "no body".to_owned())?;
    body.append_child(&anchor).map_err(|e| format!("{e:?}"))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
