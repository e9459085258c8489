use wasm_bindgen::JsCast;
use web_sys::{
    window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

pub fn scroll_to_top() {
    if let Some(window) = window() {
        let mut opts = ScrollToOptions::new();
        opts.top(0.0).behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Centers the first element carrying `data-field="<name>"` and focuses it
/// when it is an input.
pub fn focus_field(name: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let selector = format!("[data-field=\"{}\"]", name);
    if let Ok(Some(element)) = document.query_selector(&selector) {
        let mut opts = ScrollIntoViewOptions::new();
        opts.behavior(ScrollBehavior::Smooth).block(ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&opts);
        if let Some(input) = element.dyn_ref::<HtmlElement>() {
            let _ = input.focus();
        }
    }
}
