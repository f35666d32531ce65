//! Browser glue shared by the pages: toasts, navigation, the `setTimeout`
//! backed delay and number formatting.

use std::future::Future;
use std::time::Duration;

use js_sys::Reflect;
use num_format::{Locale, ToFormattedString};
use saber_common::jobs::pipeline::Delay;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Waits on the browser timer queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDelay;

impl Delay for GlooDelay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }
}

/// Shows a short-lived notice at the bottom of the screen.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    toast.set_class_name("toast");

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Full page navigation; every route is served by the same `index.html`.
pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::warn!("navigation to {} failed: {:?}", href, e);
        }
    }
}

pub fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        history.back().ok();
    }
}

/// Current `(pathname, search)` of the window.
pub fn current_location() -> (String, String) {
    web_sys::window()
        .map(|w| w.location())
        .map(|l| (l.pathname().unwrap_or_default(), l.search().unwrap_or_default()))
        .unwrap_or_default()
}

/// `12345` → `12.345`
pub fn format_count(n: u32) -> String {
    n.to_formatted_string(&Locale::pt)
}

/// Publishes the unsaved-changes flag read by the `beforeunload` guard in
/// `index.html`.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        ) {
            log::warn!("could not publish dirty flag: {:?}", e);
        }
    }
}
