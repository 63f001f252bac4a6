use crate::core::constants::NAV_LINK_SELECTOR;
use crate::core::nav::anchor_selector;
use crate::dom;
use web_sys as web;

// Intercept in-page nav links and glide to the target section instead of
// jumping. Links without a matching target keep their default behavior.
pub fn wire_smooth_scroll(document: &web::Document) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let doc = document.clone();
        let href_source = link.clone();
        dom::add_click_listener(&link, move |ev| {
            let Some(selector) = href_source
                .get_attribute("href")
                .as_deref()
                .and_then(anchor_selector)
            else {
                return;
            };
            let Ok(Some(target)) = doc.query_selector(&selector) else {
                return;
            };
            ev.prevent_default();
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}
