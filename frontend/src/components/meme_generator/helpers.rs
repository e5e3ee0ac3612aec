//! Utility functions for the meme generator component.
//!
//! - **Catalog access**: the single GET issued on first render.
//! - **User feedback**: transient toast notifications.
//! - **Formatting**: thousands-separated counters for the strip header.
//! - **JS interop**: turning thrown `JsValue`s into readable messages.

use common::error::CatalogFetchError;
use common::model::catalog::parse_catalog;
use common::model::template::Template;
use gloo_net::http::Request;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// Fetches and decodes the full template catalog.
///
/// Transport failures, non-2xx answers and undecodable bodies all come back
/// as a `CatalogFetchError`; nothing here panics.
pub async fn fetch_catalog(url: &str) -> Result<Vec<Template>, CatalogFetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogFetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(CatalogFetchError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| CatalogFetchError::Network(e.to_string()))?;

    parse_catalog(&body)
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast is appended to `<body>` and removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// "Showing 4 of 1,000 templates".
pub fn visible_summary(visible: usize, total: usize) -> String {
    format!(
        "Showing {} of {} templates",
        visible.to_formatted_string(&Locale::en),
        total.to_formatted_string(&Locale::en)
    )
}

/// Best-effort description of a value thrown by a browser API.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        text
    } else if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        format!("{:?}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_groups_thousands() {
        assert_eq!(visible_summary(4, 100), "Showing 4 of 100 templates");
        assert_eq!(visible_summary(1200, 12000), "Showing 1,200 of 12,000 templates");
    }
}
