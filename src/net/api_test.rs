use super::*;

#[test]
fn endpoints_match_backend_routes() {
    assert_eq!(ANALYZE_ENDPOINT, "/analyze");
    assert_eq!(DOWNLOAD_ENDPOINT, "/download_pdf");
    assert_eq!(CHAT_ENDPOINT, "/chat");
}

#[test]
fn analyze_failed_message_formats_status() {
    assert_eq!(analyze_failed_message(500), "analyze request failed: 500");
}

#[test]
fn download_failed_message_formats_status() {
    assert_eq!(download_failed_message(404), "download request failed: 404");
}

#[test]
fn chat_failed_message_formats_status() {
    assert_eq!(chat_failed_message(502), "chat request failed: 502");
}
