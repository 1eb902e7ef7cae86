use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Event listener that unregisters itself when dropped, so repeated
/// mount/unmount cycles never accumulate handlers.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }

    /// Same as `new` but registered passive, for high-frequency events the
    /// handler never cancels (scroll, pointer-move).
    pub fn new_passive(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        );
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// IntersectionObserver plus its callback closure; disconnected on drop.
pub struct IntersectionGuard {
    observer: web::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl IntersectionGuard {
    pub fn new(
        threshold: f64,
        handler: impl FnMut(js_sys::Array, web::IntersectionObserver) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(
            Box::new(handler) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
        );
        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
        let observer = web::IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;
        Some(Self {
            observer,
            _closure: closure,
        })
    }

    pub fn observe(&self, element: &web::Element) {
        self.observer.observe(element);
    }
}

impl Drop for IntersectionGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Pending timeout cleared on drop, so an unmount cancels the callback.
pub struct TimeoutGuard {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl TimeoutGuard {
    pub fn new(delay_ms: i32, handler: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let handle = web::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}
