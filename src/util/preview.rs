//! Inline image preview via `FileReader`.
//!
//! Reads the selected land image as a data URL and hands the result to
//! a callback once the load completes. Requires a browser environment;
//! unreadable files are silently ignored, matching the form's
//! no-validation contract.

/// Read `file` as a data URL and invoke `on_loaded` with the result.
///
/// The read is asynchronous; this returns immediately. Failures (an
/// unreadable file, a non-string reader result) drop the preview
/// update on the floor.
#[cfg(feature = "hydrate")]
pub fn load_preview(file: &web_sys::File, on_loaded: impl Fn(String) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };

    let onload = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(reader) = target.dyn_into::<web_sys::FileReader>() else {
            return;
        };
        if let Ok(value) = reader.result() {
            if let Some(url) = value.as_string() {
                on_loaded(url);
            }
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    // One leaked closure per selected file; released with the page.
    onload.forget();

    let _ = reader.read_as_data_url(file);
}
