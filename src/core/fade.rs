use super::constants::VISIBLE_CLASS;
use super::port::PresentationPort;

/// Terminal reveal: marks the element visible. Re-applying is a no-op.
#[inline]
pub fn reveal<P: PresentationPort>(port: &P, element: &P::Element) {
    port.set_class(element, VISIBLE_CLASS, true);
}
