use crate::listener::TimeoutGuard;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loading-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("loading-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Lift the loading overlay after the configured dwell. Dropping the guard
/// (unmount) cancels a dismissal that has not fired yet.
pub fn dismiss_after(document: &web::Document, delay_ms: i32) -> Option<TimeoutGuard> {
    let document = document.clone();
    TimeoutGuard::new(delay_ms, move || {
        hide(&document);
        log::info!("[overlay] loading overlay dismissed");
    })
}
