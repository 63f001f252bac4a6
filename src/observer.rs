use crate::core::visibility::{observer_thresholds, IntersectionReport};
use crate::core::{TriggerStrategy, VisibilityTrigger};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A visibility trigger bound to an `IntersectionObserver`, or to the eager
/// strategy when the browser has none.
pub struct ObservedTrigger {
    trigger: Rc<RefCell<VisibilityTrigger<web::Element>>>,
    observer: Option<web::IntersectionObserver>,
}

#[inline]
pub fn has_intersection_observer(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

impl ObservedTrigger {
    pub fn install(window: &web::Window, threshold: f64) -> Self {
        let trigger = Rc::new(RefCell::new(VisibilityTrigger::new(
            threshold,
            TriggerStrategy::Observe,
        )));
        let observer = if has_intersection_observer(window) {
            build_observer(window, &trigger, threshold)
        } else {
            log::info!("[visibility] no IntersectionObserver; revealing eagerly");
            None
        };
        if observer.is_none() {
            *trigger.borrow_mut() = VisibilityTrigger::new(threshold, TriggerStrategy::Eager);
        }
        Self { trigger, observer }
    }

    pub fn observe(&self, target: web::Element, on_enter: impl FnMut(&web::Element) + 'static) {
        let pending = self.trigger.borrow_mut().observe(target.clone(), on_enter);
        if let (true, Some(observer)) = (pending, &self.observer) {
            observer.observe(&target);
        }
    }

    pub fn strategy(&self) -> TriggerStrategy {
        self.trigger.borrow().strategy()
    }
}

fn build_observer(
    window: &web::Window,
    trigger: &Rc<RefCell<VisibilityTrigger<web::Element>>>,
    threshold: f64,
) -> Option<web::IntersectionObserver> {
    let trigger = trigger.clone();
    let window = window.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let report = report_for(&window, &entry);
                if trigger.borrow_mut().notify_report(&target, &report) {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let steps: js_sys::Array = observer_thresholds(threshold)
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&steps);
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[visibility] IntersectionObserver init error: {:?}; revealing eagerly", e);
            return None;
        }
    };
    callback.forget();
    Some(observer)
}

// rootBounds is null for cross-origin roots; the window height stands in.
fn report_for(window: &web::Window, entry: &web::IntersectionObserverEntry) -> IntersectionReport {
    let viewport_height = entry
        .root_bounds()
        .map(|bounds| bounds.height())
        .or_else(|| window.inner_height().ok().and_then(|h| h.as_f64()))
        .unwrap_or(0.0);
    IntersectionReport::new(entry.is_intersecting(), entry.intersection_ratio())
        .covering(entry.intersection_rect().height(), viewport_height)
}
