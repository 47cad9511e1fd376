//! Document Title Helper

/// Set the tab title for the current page
pub fn use_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} - BookVault", title));
    }
}
