//! Web Module Tests
//!
//! Validates the server-rendered page.
//!
//! ## Test Scopes
//! - **Rendering**: Entries appear as list items in arrival order; the empty log
//!   shows the placeholder message.
//! - **Escaping**: Attacker-controlled content cannot inject markup.
//! - **Endpoint**: `GET /` serves the rendered page end to end.

#[cfg(test)]
mod tests {
    use crate::app;
    use crate::storage::memory::SubmissionLog;
    use crate::web::handlers::{render_page, EMPTY_MESSAGE};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn home_request() -> Request<Body> {
        Request::builder()
            .uri("/")
            .method("GET")
            .body(Body::empty())
            .unwrap()
    }

    // ============================================================
    // RENDERING
    // ============================================================

    #[test]
    fn test_empty_log_renders_placeholder() {
        let page = render_page(&[]);

        assert!(page.contains(EMPTY_MESSAGE));
        assert!(!page.contains("<li>"));
    }

    #[test]
    fn test_entries_render_as_list_items_in_order() {
        let entries = vec![json!("first"), json!("second"), json!("third")];
        let page = render_page(&entries);

        assert!(!page.contains(EMPTY_MESSAGE));
        let first = page.find("<li>first</li>").unwrap();
        let second = page.find("<li>second</li>").unwrap();
        let third = page.find("<li>third</li>").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_non_string_entries_render_in_json_form() {
        let entries = vec![json!(42), json!({"url": "https://example.com"})];
        let page = render_page(&entries);

        assert!(page.contains("<li>42</li>"));
        // Object form is escaped, so the quotes become entities.
        assert!(page.contains("{&quot;url&quot;:&quot;https://example.com&quot;}"));
    }

    // ============================================================
    // ESCAPING
    // ============================================================

    #[test]
    fn test_markup_in_content_is_escaped() {
        let entries = vec![json!("<script>alert('x')</script>")];
        let page = render_page(&entries);

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_ampersands_are_escaped_once() {
        let entries = vec![json!("fish & chips")];
        let page = render_page(&entries);

        assert!(page.contains("fish &amp; chips"));
        assert!(!page.contains("&amp;amp;"));
    }

    // ============================================================
    // ENDPOINT
    // ============================================================

    #[tokio::test]
    async fn test_home_page_lists_submitted_content() {
        let log = Arc::new(SubmissionLog::new());
        log.append(json!("hello")).await;
        let router = app(log);

        let response = router.oneshot(home_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<li>hello</li>"));
        assert!(!page.contains(EMPTY_MESSAGE));
    }

    #[tokio::test]
    async fn test_home_page_shows_placeholder_before_any_submission() {
        let router = app(Arc::new(SubmissionLog::new()));

        let response = router.oneshot(home_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains(EMPTY_MESSAGE));
        assert!(!page.contains("<li>"));
    }

    #[tokio::test]
    async fn test_repeated_renders_are_identical() {
        let log = Arc::new(SubmissionLog::new());
        log.append(json!("stable")).await;
        let router = app(log);

        let first = router.clone().oneshot(home_request()).await.unwrap();
        let second = router.oneshot(home_request()).await.unwrap();

        let first_body = to_bytes(first.into_body(), 1024 * 1024).await.unwrap();
        let second_body = to_bytes(second.into_body(), 1024 * 1024).await.unwrap();
        assert_eq!(first_body, second_body);
    }
}
