use crate::core::constants::{PAST_SCROLL_PX, SECTION_ACTIVATION_PX};
use crate::core::sections::{self, SectionRegistry};
use crate::dom;
use crate::listener::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ScrollWiring {
    pub registry: Rc<SectionRegistry>,
    pub section_els: Rc<Vec<web::Element>>,
    pub nav_links: Rc<Vec<(usize, web::Element)>>,
    pub back_to_top: Option<web::Element>,
    pub active: Rc<Cell<usize>>,
    pub past_threshold: Rc<Cell<bool>>,
}

/// Wire the scroll-spy. The handler is passive: it only derives state, it
/// never cancels the scroll.
pub fn wire_scroll(window: &web::Window, w: ScrollWiring) -> EventListener {
    // Derive once at mount so late subscribers see a consistent state before
    // the first scroll event.
    on_scroll(&w);
    EventListener::new_passive(window, "scroll", move |_| on_scroll(&w))
}

fn on_scroll(w: &ScrollWiring) {
    let y = dom::scroll_y();
    let past = sections::past_threshold(y, PAST_SCROLL_PX);
    if past != w.past_threshold.get() {
        w.past_threshold.set(past);
        if let Some(el) = &w.back_to_top {
            let cl = el.class_list();
            if past {
                _ = cl.add_1("visible");
            } else {
                _ = cl.remove_1("visible");
            }
        }
    }

    if w.section_els.is_empty() {
        return;
    }
    let tops: Vec<f64> = w.section_els.iter().map(dom::element_top).collect();
    let active = sections::active_index(&tops, SECTION_ACTIVATION_PX);
    if active != w.active.get() {
        w.active.set(active);
        for (order, link) in w.nav_links.iter() {
            let cl = link.class_list();
            if *order == active {
                _ = cl.add_1("active");
            } else {
                _ = cl.remove_1("active");
            }
        }
        if let Some(id) = w.registry.id_at(active) {
            log::info!("[scroll] active section '{id}'");
        }
    }
}
