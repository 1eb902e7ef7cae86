use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

pub fn viewport_size() -> Vec2 {
    let Some(window) = web::window() else {
        return Vec2::new(1280.0, 720.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(720.0);
    Vec2::new(width as f32, height as f32)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Viewport-relative top of an element, px.
#[inline]
pub fn element_top(element: &web::Element) -> f64 {
    element.get_bounding_client_rect().top()
}

/// Viewport-relative center of an element, px.
#[inline]
pub fn element_center(element: &web::Element) -> Vec2 {
    let rect = element.get_bounding_client_rect();
    Vec2::new(
        ((rect.left() + rect.right()) / 2.0) as f32,
        ((rect.top() + rect.bottom()) / 2.0) as f32,
    )
}

pub fn scroll_to_top() {
    if let Some(window) = web::window() {
        let options = web::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_into_view(element: &web::Element) {
    let options = web::ScrollIntoViewOptions::new();
    options.set_behavior(web::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            out.push(el);
        }
    }
    out
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlElement>()
        .ok()
}
