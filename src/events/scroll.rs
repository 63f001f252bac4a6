use crate::core::scroll::{self, on_scroll_signal};
use crate::core::ScrollCoordinator;
use crate::dom::DomPort;
use crate::frame::AnimationFrames;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Subscribe the coordinator to window scrolls (passive listener) and run
/// one coordinated pass for the load-time scroll position.
pub fn wire_scroll(
    window: &web::Window,
    coordinator: Rc<RefCell<ScrollCoordinator<DomPort>>>,
    frames: AnimationFrames,
) {
    let on_scroll = coordinator.clone();
    let on_scroll_frames = frames.clone();
    let closure = Closure::wrap(Box::new(move || {
        on_scroll_signal(&on_scroll, &on_scroll_frames);
    }) as Box<dyn FnMut()>);

    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("[scroll] listener error: {:?}", e);
    }
    closure.forget();

    scroll::start(&coordinator, &frames);
}
