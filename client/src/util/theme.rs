//! Theme persistence and application.
//!
//! The preference lives in `localStorage["blog-theme"]` and is applied as a
//! `dark` class on `<html>`. Storage errors are ignored; the theme just does
//! not persist.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use thoughts::state::Theme;
use thoughts::state::theme::ThemeStorage;

/// `ThemeStorage` over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl ThemeStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// Class toggled on the document element.
pub fn root_class(theme: Theme) -> Option<&'static str> {
    match theme {
        Theme::Dark => Some("dark"),
        Theme::Light => None,
    }
}

/// Add or remove the `dark` class on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let classes = el.class_list();
            let _ = match root_class(theme) {
                Some(class) => classes.add_1(class),
                None => classes.remove_1("dark"),
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Icon for the toggle button: what clicking switches *to*.
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}
