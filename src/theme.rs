//! Dark/light theme preference, persisted in browser local storage and
//! applied as a `dark` class on the document element.

const STORAGE_KEY: &str = "im-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Last persisted preference; dark when nothing is stored.
pub fn stored() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    match stored.as_deref() {
        Some("light") => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Persist and apply the preference to the document element.
pub fn apply(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
    let root = gloo_utils::document_element();
    let _ = root
        .class_list()
        .toggle_with_force("dark", theme == Theme::Dark);
}
