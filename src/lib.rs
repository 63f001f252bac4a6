#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod core;
pub mod dom;
pub mod effects;
mod events;
pub mod frame;
pub mod observer;

use crate::core::{ScrollConfig, ScrollCoordinator, ScrollTargets};
use crate::dom::DomPort;
use crate::frame::{AnimationFrames, Timeouts};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-fx starting");

    let Some((_, document)) = dom::window_document() else {
        log::error!("init error: no window/document");
        return Ok(());
    };
    if document_parsed(&document) {
        run_boot();
    } else {
        let closure = Closure::once_into_js(run_boot);
        if let Err(e) =
            document.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())
        {
            log::error!("init error: {:?}", e);
        }
    }
    Ok(())
}

// The module may finish loading after DOMContentLoaded has already fired.
fn document_parsed(document: &web::Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .map(|state| state != "loading")
        .unwrap_or(false)
}

fn run_boot() {
    if let Err(e) = boot() {
        log::error!("boot error: {:?}", e);
    }
}

fn boot() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let port = DomPort::new(window.clone(), document.clone());
    let frames = AnimationFrames::new(window.clone());
    let timers = Timeouts::new(window.clone());

    // Effects
    effects::scroll_reveal::init(&window);
    events::wire_smooth_scroll(&document);
    effects::init_typewriter(&port, &timers);
    effects::init_fade_in(&port);
    effects::ripple::install(&document);
    effects::init_counters(&port, &frames);

    // Scroll-driven UX
    let back_to_top = effects::back_to_top::install(&window, &document);
    let targets = ScrollTargets::query(&port, back_to_top);
    let coordinator = Rc::new(RefCell::new(ScrollCoordinator::new(
        port,
        targets,
        ScrollConfig::default(),
    )));
    events::wire_scroll(&window, coordinator, frames);

    log::info!("[boot] page effects wired");
    Ok(())
}
