use crate::constants::{AUDIO_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::core::{PreferenceState, Theme};
use crate::dom;
use web_sys as web;

/// Read persisted preferences, falling back to the documented defaults
/// (`Dark`, audio off) when storage is unavailable or holds junk. Called
/// once at mount, before the first theme-dependent paint.
pub fn load() -> PreferenceState {
    let defaults = PreferenceState::default();
    let Some(storage) = dom::local_storage() else {
        log::warn!("[prefs] storage unavailable, using defaults");
        return defaults;
    };
    let theme = storage
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|v| Theme::from_str(&v))
        .unwrap_or(defaults.theme);
    let audio_enabled = storage
        .get_item(AUDIO_STORAGE_KEY)
        .ok()
        .flatten()
        .map(|v| v == "true")
        .unwrap_or(defaults.audio_enabled);
    PreferenceState {
        theme,
        audio_enabled,
    }
}

/// Reflect the theme on the document element. Styling keys off the
/// `data-theme` attribute, so the flip is a single atomic write.
pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("data-theme", theme.as_str());
    }
}

pub fn persist_theme(theme: Theme) {
    if let Some(storage) = dom::local_storage() {
        _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

pub fn persist_audio(enabled: bool) {
    if let Some(storage) = dom::local_storage() {
        _ = storage.set_item(AUDIO_STORAGE_KEY, if enabled { "true" } else { "false" });
    }
}
