use crate::constants::{BACK_TO_TOP_CSS, BACK_TO_TOP_ID, BACK_TO_TOP_LABEL};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Build the fixed "back to top" button and append it to `<body>`.
///
/// The button starts hidden; the scroll coordinator owns its visibility.
pub fn install(window: &web::Window, document: &web::Document) -> Option<web::Element> {
    let body = document.body()?;
    let btn = match document.create_element("button") {
        Ok(b) => b,
        Err(e) => {
            log::warn!("[back-to-top] create error: {:?}", e);
            return None;
        }
    };
    btn.set_id(BACK_TO_TOP_ID);
    btn.set_text_content(Some(BACK_TO_TOP_LABEL));
    if let Some(el) = btn.dyn_ref::<web::HtmlElement>() {
        el.style().set_css_text(BACK_TO_TOP_CSS);
    }
    _ = body.append_child(&btn);

    let window = window.clone();
    dom::add_click_listener(&btn, move |_| {
        let options = web::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    });
    Some(btn)
}
