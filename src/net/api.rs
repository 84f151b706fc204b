//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a dead
//! backend degrades UI behavior (stale panels, logged errors) without
//! crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AnalysisResult;

/// Multipart form target for plan generation.
pub const ANALYZE_ENDPOINT: &str = "/analyze";
/// JSON-in, PDF-bytes-out download target.
pub const DOWNLOAD_ENDPOINT: &str = "/download_pdf";
/// Chat relay target.
pub const CHAT_ENDPOINT: &str = "/chat";

fn analyze_failed_message(status: u16) -> String {
    format!("analyze request failed: {status}")
}

fn download_failed_message(status: u16) -> String {
    format!("download request failed: {status}")
}

fn chat_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

/// Submit the analysis form as a multipart `POST /analyze` request.
///
/// The `FormData` is sent verbatim; the browser supplies the multipart
/// boundary. Field values are whatever the form controls hold, with no
/// client-side validation.
///
/// # Errors
///
/// Returns an error string on network failure, a non-success status, or
/// a body that does not parse as an analysis result.
#[cfg(feature = "hydrate")]
pub async fn submit_analysis(form: web_sys::FormData) -> Result<AnalysisResult, String> {
    let resp = gloo_net::http::Request::post(ANALYZE_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(analyze_failed_message(resp.status()));
    }
    resp.json::<AnalysisResult>().await.map_err(|e| e.to_string())
}

/// POST the stored analysis result to `/download_pdf` and return the
/// raw PDF bytes. The result object is serialized verbatim.
///
/// # Errors
///
/// Returns an error string on network failure or a non-success status.
pub async fn download_pdf(result: &AnalysisResult) -> Result<Vec<u8>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(DOWNLOAD_ENDPOINT)
            .json(result)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(download_failed_message(resp.status()));
        }
        resp.binary().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = result;
        Err("not available on server".to_owned())
    }
}

/// Relay one chat line to `POST /chat` and return the reply text.
///
/// # Errors
///
/// Returns an error string on network failure, a non-success status, or
/// an unparseable reply body.
pub async fn send_chat(message: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ChatRequest {
            message: message.to_owned(),
        };
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(chat_failed_message(resp.status()));
        }
        let reply: super::types::ChatReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(reply.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}
