#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod engine;
mod events;
mod eyes;
mod listener;
mod overlay;
mod prefs;
mod reveal;

pub use crate::core::pointer::CursorVariant;
pub use crate::core::prefs::Theme;
pub use engine::{Engine, ShellConfig};

// The default mount keeps the engine alive for the page lifetime; embedders
// that mount/unmount explicitly hold the Engine themselves and drop it to
// tear everything down.
thread_local! {
    static ENGINE: RefCell<Option<Engine>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let shell = ShellConfig::collect(&document);
    let engine = Engine::mount(&window, &document, shell);
    ENGINE.with(|slot| *slot.borrow_mut() = Some(engine));
    Ok(())
}
