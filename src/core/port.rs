//! Seams between the effect logic and the host document.
//!
//! Everything in `core` talks to the page through these traits so the same
//! state machines run against the real DOM in the browser and against a
//! recording double in host-side tests.

/// Read/write access to the rendered document.
///
/// Implementations are cheap handles (`Clone`) over shared document state;
/// effects clone them into frame and timer callbacks.
pub trait PresentationPort: Clone {
    type Element: Clone;

    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Current vertical scroll position of the viewport.
    fn scroll_offset(&self) -> f64;
    /// Distance from the element's top edge to the top of the document.
    fn offset_top(&self, element: &Self::Element) -> f64;
    fn element_id(&self, element: &Self::Element) -> String;
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn text(&self, element: &Self::Element) -> String;

    fn set_class(&self, element: &Self::Element, class: &str, on: bool);
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);
    fn set_text(&self, element: &Self::Element, text: &str);
}

/// Runs a callback before the next rendered frame.
pub trait FrameScheduler: Clone {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Runs a callback after a delay in milliseconds.
pub trait DelayScheduler: Clone {
    fn schedule_after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}
