use async_trait::async_trait;
use axum::response::{Html, IntoResponse, Response};
use faultline_core::Error;

use crate::classify::classify;

/// Renders an error as a page for clients that prefer one
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render_error_page(&self, error: &Error) -> Response;
}

/// Minimal HTML page showing the status and reason, never diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicPageRenderer;

#[async_trait]
impl PageRenderer for BasicPageRenderer {
    async fn render_error_page(&self, error: &Error) -> Response {
        let classification = classify(error.inner());
        let code = classification.status.as_u16();
        let reason = escape(&classification.reason);

        let page = format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\n\
             <body>\n<h1>{code}</h1>\n<p>{reason}</p>\n</body>\n</html>\n"
        );

        (classification.status, Html(page)).into_response()
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
