use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::behavior::scroll_spy::{scroll_target, SectionBounds};

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Current layout box of the element with `id`, if it is on the page.
pub fn section_bounds(id: &str) -> Option<SectionBounds> {
    let element = window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;
    Some(SectionBounds::new(
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    ))
}

/// Smooth-scrolls so the section starts just under the fixed navbar.
pub fn scroll_to_section(id: &str) {
    let Some(bounds) = section_bounds(id) else {
        log::debug!("no section #{} to scroll to", id);
        return;
    };
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(scroll_target(bounds.top));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
