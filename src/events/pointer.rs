use crate::core::pointer::{CursorVariant, HoverCounter, ViewportPointer};
use crate::eyes::EyeWidget;
use crate::listener::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Custom cursor elements that shadow the pointer. Either may be absent.
#[derive(Clone)]
pub struct CursorElements {
    pub inner: Option<web::HtmlElement>,
    pub outer: Option<web::HtmlElement>,
}

impl CursorElements {
    fn follow(&self, x: f32, y: f32) {
        for el in [&self.inner, &self.outer].into_iter().flatten() {
            let style = el.style();
            _ = style.set_property("left", &format!("{x:.0}px"));
            _ = style.set_property("top", &format!("{y:.0}px"));
        }
    }

    pub fn set_variant(&self, variant: CursorVariant) {
        for el in [&self.inner, &self.outer].into_iter().flatten() {
            let cl = el.class_list();
            match variant {
                CursorVariant::Hover => _ = cl.add_1("cursor-hover"),
                CursorVariant::Default => _ = cl.remove_1("cursor-hover"),
            }
        }
    }
}

#[derive(Clone)]
pub struct PointerWiring {
    pub pointer: Rc<RefCell<ViewportPointer>>,
    pub hover: Rc<RefCell<HoverCounter>>,
    pub widgets: Rc<RefCell<Vec<EyeWidget>>>,
    pub cursor: CursorElements,
    pub alive: Rc<Cell<bool>>,
}

/// Single-shot rAF batch: pointer-move events mark state dirty and queue at
/// most one frame; the frame recomputes every downstream consumer once.
#[derive(Clone)]
struct FrameQueue {
    queued: Rc<Cell<bool>>,
    handle: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameQueue {
    fn new(w: PointerWiring) -> Self {
        let queued = Rc::new(Cell::new(false));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let queued_tick = queued.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            queued_tick.set(false);
            if !w.alive.get() {
                return;
            }
            let pos = w.pointer.borrow().pos();
            w.cursor.follow(pos.x, pos.y);
            for widget in w.widgets.borrow().iter() {
                widget.apply(pos);
            }
        }) as Box<dyn FnMut()>));
        Self {
            queued,
            handle: Rc::new(Cell::new(0)),
            tick,
        }
    }

    fn request(&self) {
        if self.queued.get() {
            return;
        }
        let Some(window) = web::window() else { return };
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else { return };
        if let Ok(handle) = window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            self.queued.set(true);
            self.handle.set(handle);
        }
    }

    fn cancel(&self) {
        if !self.queued.get() {
            return;
        }
        self.queued.set(false);
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(self.handle.get());
        }
    }
}

/// Pointer wiring guards; dropping removes every listener and cancels any
/// queued frame.
pub struct PointerTracker {
    wiring: PointerWiring,
    frame: FrameQueue,
    _move_listener: EventListener,
    _hover_listeners: Vec<EventListener>,
}

impl PointerTracker {
    /// Subscribe an eye widget to the pointer source. A widget registered
    /// after pointer movement has already happened is brought up to date
    /// from the last-known position instead of waiting for the next event.
    pub fn register_widget(&self, widget: EyeWidget) {
        {
            let pointer = self.wiring.pointer.borrow();
            if pointer.observed() {
                widget.apply(pointer.pos());
            }
        }
        self.wiring.widgets.borrow_mut().push(widget);
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        self.frame.cancel();
    }
}

pub fn wire_pointer(
    window: &web::Window,
    w: PointerWiring,
    interactive: &[web::Element],
) -> PointerTracker {
    let frame = FrameQueue::new(w.clone());

    let move_listener = {
        let w = w.clone();
        let frame = frame.clone();
        EventListener::new_passive(window, "pointermove", move |ev: web::Event| {
            let ev: web::MouseEvent = ev.unchecked_into();
            w.pointer
                .borrow_mut()
                .update(ev.client_x() as f32, ev.client_y() as f32);
            frame.request();
        })
    };

    // Interactive targets registered once at mount; the enter/leave refcount
    // keeps nested targets from reverting the variant early.
    let mut hover_listeners = Vec::with_capacity(interactive.len() * 2);
    for element in interactive {
        let target: &web::EventTarget = element.as_ref();
        hover_listeners.push(EventListener::new(target, "mouseenter", {
            let w = w.clone();
            move |_| {
                let variant = w.hover.borrow_mut().enter();
                w.cursor.set_variant(variant);
            }
        }));
        hover_listeners.push(EventListener::new(target, "mouseleave", {
            let w = w.clone();
            move |_| {
                let variant = w.hover.borrow_mut().leave();
                w.cursor.set_variant(variant);
            }
        }));
    }

    PointerTracker {
        wiring: w,
        frame,
        _move_listener: move_listener,
        _hover_listeners: hover_listeners,
    }
}
