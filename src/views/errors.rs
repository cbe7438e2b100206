//! Error pages.

use axum::response::Html;

use super::{Flash, layout};

/// Page for an unknown path or a missing record.
#[must_use]
pub fn not_found() -> Html<String> {
    layout(
        "Not found",
        None,
        r#"<h1>404</h1><p>Sorry, that page does not exist.</p><p><a href="/">Back home</a></p>"#,
    )
}

/// Page for a rejected submission, listing each problem.
#[must_use]
pub fn bad_request(messages: &[String]) -> Html<String> {
    let flash = Flash::error(messages.to_vec());
    layout(
        "Bad request",
        Some(&flash),
        r#"<h1>400</h1><p>The submission could not be accepted.</p><p><a href="/">Back home</a></p>"#,
    )
}

/// Page for a server-side failure.
#[must_use]
pub fn server_error() -> Html<String> {
    layout(
        "Server error",
        None,
        r#"<h1>500</h1><p>Something went wrong on our side. Please try again.</p>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_lists_problems() {
        let Html(page) = bad_request(&["name is required".to_string()]);
        assert!(page.contains("<li>name is required</li>"));
        assert!(page.contains("<h1>400</h1>"));
    }
}
