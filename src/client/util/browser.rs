//! Thin wrappers over the browser calls the screens need.

use dioxus::document;

/// Open `url` in a new browser tab.
pub fn open_in_new_tab(url: &str) {
    let _ = document::eval(&format!(
        "window.open('{}', '_blank');",
        escape_single_quoted(url)
    ));
}

/// Native confirm dialog for destructive actions.
pub async fn confirm(message: &str) -> bool {
    let result = document::eval(&format!(
        "return window.confirm('{}');",
        escape_single_quoted(message)
    ))
    .await;

    matches!(result, Ok(value) if value.as_bool() == Some(true))
}

/// Persist a value in browser local storage.
pub fn local_storage_set(key: &str, value: &str) {
    let _ = document::eval(&format!(
        "localStorage.setItem('{}', '{}');",
        escape_single_quoted(key),
        escape_single_quoted(value)
    ));
}

/// Read a value from browser local storage.
pub async fn local_storage_get(key: &str) -> Option<String> {
    let result = document::eval(&format!(
        "return localStorage.getItem('{}');",
        escape_single_quoted(key)
    ))
    .await;

    match result {
        Ok(value) => value.as_str().map(|s| s.to_string()),
        Err(_) => None,
    }
}

/// Wait roughly `millis` before continuing, for post-submit redirects.
pub async fn sleep_ms(millis: u32) {
    let _ = document::eval(&format!(
        "return await new Promise(resolve => setTimeout(resolve, {}));",
        millis
    ))
    .await;
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test escaping of values spliced into single-quoted script literals.
    ///
    /// Expected: quotes and backslashes are escaped, everything else passes
    /// through untouched.
    #[test]
    fn escape_handles_quotes_and_backslashes() {
        assert_eq!(
            escape_single_quoted("Delete 'ACME Corp'?"),
            "Delete \\'ACME Corp\\'?"
        );
        assert_eq!(escape_single_quoted("a\\b"), "a\\\\b");
        assert_eq!(
            escape_single_quoted("https://example.com/file.pdf"),
            "https://example.com/file.pdf"
        );
    }
}
