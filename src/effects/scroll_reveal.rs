use crate::constants::*;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hand the reveal groups to the page's ScrollReveal library, if loaded.
pub fn init(window: &web::Window) {
    let Some(ctor) = Reflect::get(window, &JsValue::from_str(SCROLL_REVEAL_GLOBAL))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
    else {
        return;
    };
    if let Err(e) = reveal_groups(&ctor) {
        log::warn!("[scroll-reveal] setup failed: {:?}", e);
    }
}

fn reveal_groups(ctor: &Function) -> Result<(), JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"distance".into(), &SCROLL_REVEAL_DISTANCE.into())?;
    Reflect::set(&options, &"duration".into(), &SCROLL_REVEAL_DURATION_MS.into())?;
    Reflect::set(&options, &"easing".into(), &SCROLL_REVEAL_EASING.into())?;
    Reflect::set(&options, &"origin".into(), &SCROLL_REVEAL_ORIGIN.into())?;
    Reflect::set(&options, &"viewFactor".into(), &SCROLL_REVEAL_VIEW_FACTOR.into())?;

    let sr = ctor.call1(&JsValue::NULL, &options)?;
    let reveal: Function = Reflect::get(&sr, &"reveal".into())?.dyn_into()?;
    for (selector, interval) in SCROLL_REVEAL_GROUPS {
        let group = Object::new();
        if let Some(ms) = interval {
            Reflect::set(&group, &"interval".into(), &ms.into())?;
        }
        reveal.call2(&sr, &selector.into(), &group)?;
    }
    log::info!("[scroll-reveal] {} groups", SCROLL_REVEAL_GROUPS.len());
    Ok(())
}
