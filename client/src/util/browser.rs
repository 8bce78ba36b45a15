//! Window, location and dialog access.
//!
//! Native builds see an empty location and an auto-confirmed dialog.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use thoughts::auth::Navigator;

/// `location.hash`, including the leading `#` when present.
pub fn current_hash() -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(hash) = web_sys::window().and_then(|w| w.location().hash().ok()) {
            return hash;
        }
    }
    String::new()
}

/// `location.origin`.
pub fn current_origin() -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    String::new()
}

/// Path plus query, as the guard records it for the post-login return.
pub fn join_location(path: &str, search: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    match search.trim_start_matches('?') {
        "" => path.to_owned(),
        query => format!("{path}?{query}"),
    }
}

/// `window.confirm`. A missing window or a failed dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}

/// Full-page navigation through `location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_full(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    tracing::warn!(path, "full-page navigation failed");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }
}
