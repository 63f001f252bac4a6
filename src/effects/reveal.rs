use crate::constants::{COUNTER_SELECTOR, FADE_SELECTOR, TYPEWRITER_SELECTOR};
use crate::core::constants::{COUNTER_THRESHOLD, FADE_THRESHOLD};
use crate::core::{counter, fade, typewriter, PresentationPort};
use crate::dom::DomPort;
use crate::frame::{AnimationFrames, Timeouts};
use crate::observer::ObservedTrigger;

/// Fade `.fade-in` elements in the first time 30% of them is on screen.
pub fn init_fade_in(port: &DomPort) {
    let faders = port.query_all(FADE_SELECTOR);
    if faders.is_empty() {
        return;
    }
    let trigger = ObservedTrigger::install(port.window(), FADE_THRESHOLD);
    log::info!("[boot] fade-in targets={} ({:?})", faders.len(), trigger.strategy());
    for el in faders {
        let port = port.clone();
        trigger.observe(el, move |target| fade::reveal(&port, target));
    }
}

/// Ramp `.counter` elements up to their `data-target` once 40% visible.
pub fn init_counters(port: &DomPort, frames: &AnimationFrames) {
    let counters = port.query_all(COUNTER_SELECTOR);
    if counters.is_empty() {
        return;
    }
    let trigger = ObservedTrigger::install(port.window(), COUNTER_THRESHOLD);
    log::info!("[boot] counters={} ({:?})", counters.len(), trigger.strategy());
    for el in counters {
        let port = port.clone();
        let frames = frames.clone();
        trigger.observe(el, move |target| counter::start(&port, &frames, target));
    }
}

/// Retype every `.typewriter-text` element over its `data-duration`.
pub fn init_typewriter(port: &DomPort, timers: &Timeouts) {
    for el in port.query_all(TYPEWRITER_SELECTOR) {
        let plan = typewriter::plan_for(port, &el);
        log::debug!(
            "[typewriter] {} chars every {}ms",
            plan.frames(),
            plan.step_ms()
        );
        typewriter::run(port.clone(), timers.clone(), el, plan);
    }
}
