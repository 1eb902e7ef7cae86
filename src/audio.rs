use crate::constants::AMBIENT_VOLUME;
use crate::core::{AudioMachine, AudioStart};
use crate::prefs;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Handle on the ambient audio element. The element is optional; a page
/// without one degrades to a silent no-op controller.
#[derive(Clone)]
pub struct AudioPlayer {
    element: Option<web::HtmlAudioElement>,
}

impl AudioPlayer {
    pub fn acquire(document: &web::Document, element_id: &str) -> Self {
        let element = document
            .get_element_by_id(element_id)
            .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
        if let Some(el) = &element {
            el.set_volume(AMBIENT_VOLUME);
            el.set_loop(true);
        } else {
            log::warn!("[audio] no #{element_id} element, ambient audio disabled");
        }
        Self { element }
    }

    /// Ask the browser to start playback. The returned promise settles the
    /// autoplay negotiation; `None` means the request failed synchronously.
    fn play(&self) -> Option<js_sys::Promise> {
        self.element.as_ref()?.play().ok()
    }

    fn pause(&self) {
        if let Some(el) = &self.element {
            _ = el.pause();
        }
    }
}

/// Begin the asynchronous start negotiation for `machine`. The flag is only
/// confirmed (and persisted) once the browser resolves the request; a
/// rejection rolls back to off with no retry. An outcome arriving after the
/// request was superseded (toggle-off, teardown) is discarded.
pub fn request_start(player: &AudioPlayer, machine: &Rc<RefCell<AudioMachine>>) {
    let token = machine.borrow_mut().begin_start();
    let Some(promise) = player.play() else {
        // No element or a synchronous failure: settle as denied right away.
        if machine
            .borrow_mut()
            .resolve_start(token, AudioStart::Denied)
            .is_some()
        {
            prefs::persist_audio(false);
        }
        return;
    };
    let machine = machine.clone();
    spawn_local(async move {
        let outcome = match JsFuture::from(promise).await {
            Ok(_) => AudioStart::Started,
            Err(_) => AudioStart::Denied,
        };
        let settled = machine.borrow_mut().resolve_start(token, outcome);
        match settled {
            Some(true) => {
                prefs::persist_audio(true);
                log::info!("[audio] ambient playback started");
            }
            Some(false) => {
                prefs::persist_audio(false);
                log::warn!("[audio] playback denied by the browser");
            }
            // Superseded while pending; the toggle-off already persisted.
            None => {}
        }
    });
}

/// Synchronous stop: pause, drop the flag, persist. Always succeeds.
pub fn stop(player: &AudioPlayer, machine: &Rc<RefCell<AudioMachine>>) {
    machine.borrow_mut().stop();
    player.pause();
    prefs::persist_audio(false);
}
