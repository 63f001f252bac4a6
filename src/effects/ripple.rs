use crate::constants::{
    RIPPLE_CLASS, RIPPLE_HOST_SELECTOR, RIPPLE_KEYFRAMES_CSS, RIPPLE_KEYFRAMES_ID,
    RIPPLE_SELECTOR,
};
use crate::core::ripple::{HostRect, RippleGeometry};
use crate::dom;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Delegated click feedback for every `button` / `.btn` on the page.
pub fn install(document: &web::Document) {
    inject_keyframes(document);
    let doc = document.clone();
    dom::add_click_listener(document, move |ev| {
        let Some(host) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(RIPPLE_HOST_SELECTOR).ok().flatten())
        else {
            return;
        };
        spawn_ripple(&doc, &host, &ev);
    });
}

fn spawn_ripple(document: &web::Document, host: &web::Element, ev: &web::MouseEvent) {
    if let Ok(Some(old)) = host.query_selector(RIPPLE_SELECTOR) {
        old.remove();
    }
    let Ok(circle) = document.create_element("span") else {
        return;
    };
    let rect = host.get_bounding_client_rect();
    let geometry = RippleGeometry::from_click(
        DVec2::new(ev.client_x() as f64, ev.client_y() as f64),
        HostRect::new(rect.left(), rect.top(), rect.width(), rect.height()),
    );
    if let Some(el) = circle.dyn_ref::<web::HtmlElement>() {
        let style = el.style();
        for (property, value) in geometry.style() {
            _ = style.set_property(property, &value);
        }
    }
    circle.set_class_name(RIPPLE_CLASS);

    if let Some(host_el) = host.dyn_ref::<web::HtmlElement>() {
        let style = host_el.style();
        _ = style.set_property("overflow", "hidden");
        let positioned = style
            .get_property_value("position")
            .map(|p| !p.is_empty())
            .unwrap_or(false);
        if !positioned {
            _ = style.set_property("position", "relative");
        }
    }
    _ = host.append_child(&circle);

    let done = circle.clone();
    let cleanup = Closure::once_into_js(move || done.remove());
    _ = circle.add_event_listener_with_callback("animationend", cleanup.unchecked_ref());
}

fn inject_keyframes(document: &web::Document) {
    if document.get_element_by_id(RIPPLE_KEYFRAMES_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_id(RIPPLE_KEYFRAMES_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES_CSS));
    _ = head.append_child(&style);
}
