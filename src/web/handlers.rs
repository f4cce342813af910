use std::sync::Arc;

use axum::response::Html;
use axum::Extension;
use serde_json::Value;

use crate::storage::memory::SubmissionLog;

const PAGE_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Received QR Codes</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        h1 { color: #333; }
        ul { list-style-type: none; padding: 0; }
        li { padding: 8px 0; border-bottom: 1px solid #ccc; }
    </style>
</head>
<body>
    <h1>Received QR Codes</h1>
"#;

const PAGE_FOOTER: &str = "</body>\n</html>\n";

pub const EMPTY_MESSAGE: &str = "No QR codes received yet.";

/// `GET /` — renders the current log as an HTML list.
pub async fn handle_home(Extension(log): Extension<Arc<SubmissionLog>>) -> Html<String> {
    Html(render_page(&log.snapshot().await))
}

/// Builds the full page for a log snapshot.
///
/// String values render bare; other JSON values render in their JSON form.
/// Submission content is attacker-controlled, so every value is escaped.
pub fn render_page(entries: &[Value]) -> String {
    let mut page = String::from(PAGE_HEADER);

    if entries.is_empty() {
        page.push_str("    <p>");
        page.push_str(EMPTY_MESSAGE);
        page.push_str("</p>\n");
    } else {
        page.push_str("    <ul>\n");
        for entry in entries {
            page.push_str("        <li>");
            page.push_str(&escape_html(&format_entry(entry)));
            page.push_str("</li>\n");
        }
        page.push_str("    </ul>\n");
    }

    page.push_str(PAGE_FOOTER);
    page
}

fn format_entry(entry: &Value) -> String {
    match entry {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
