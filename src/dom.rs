use crate::core::PresentationPort;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {:?}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn add_click_listener(
    target: &web::EventTarget,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Presentation port over the live document.
#[derive(Clone)]
pub struct DomPort {
    window: web::Window,
    document: web::Document,
}

impl DomPort {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }

    pub fn window(&self) -> &web::Window {
        &self.window
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }
}

impl PresentationPort for DomPort {
    type Element = web::Element;

    fn query(&self, selector: &str) -> Option<web::Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<web::Element> {
        query_all(&self.document, selector)
    }

    fn scroll_offset(&self) -> f64 {
        self.window
            .scroll_y()
            .or_else(|_| self.window.page_y_offset())
            .unwrap_or(0.0)
    }

    fn offset_top(&self, element: &web::Element) -> f64 {
        element
            .dyn_ref::<web::HtmlElement>()
            .map(|el| el.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn element_id(&self, element: &web::Element) -> String {
        element.id()
    }

    fn attribute(&self, element: &web::Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn text(&self, element: &web::Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_class(&self, element: &web::Element, class: &str, on: bool) {
        _ = element.class_list().toggle_with_force(class, on);
    }

    fn set_style(&self, element: &web::Element, property: &str, value: &str) {
        if let Some(el) = element.dyn_ref::<web::HtmlElement>() {
            _ = el.style().set_property(property, value);
        }
    }

    fn set_text(&self, element: &web::Element, text: &str) {
        element.set_text_content(Some(text));
    }
}
