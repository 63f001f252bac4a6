use crate::core::{DelayScheduler, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed frame scheduler.
#[derive(Clone)]
pub struct AnimationFrames {
    window: web::Window,
}

impl AnimationFrames {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let tick = Closure::once_into_js(move || callback());
        if let Err(e) = self.window.request_animation_frame(tick.unchecked_ref()) {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// `setTimeout`-backed delay scheduler.
#[derive(Clone)]
pub struct Timeouts {
    window: web::Window,
}

impl Timeouts {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl DelayScheduler for Timeouts {
    fn schedule_after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let timeout = Closure::once_into_js(move || callback());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(timeout.unchecked_ref(), delay)
        {
            log::warn!("[frame] setTimeout failed: {:?}", e);
        }
    }
}
