use consts::dom::{DOCUMENT_LOADING, DOM_CONTENT_LOADED, INTERSECTION_OBSERVER, VISIBILITY_CHANGE};
use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlVideoElement, Window};

use crate::{error::AutoplayError, DomVideo, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(AutoplayError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(AutoplayError::NoDocument)
}

/// Every `<video>` matching `selector`, in document order. Matches that are
/// not video elements are skipped.
pub fn discover_videos(document: &Document, selector: &str) -> Result<Vec<DomVideo>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| AutoplayError::selector(selector, e))?;

    Ok((0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<HtmlVideoElement>().ok())
        .map(DomVideo::new)
        .collect())
}

pub fn supports_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str(INTERSECTION_OBSERVER)).unwrap_or(false)
}

/// Runs `f` once the document has been parsed.
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != DOCUMENT_LOADING {
        f();
        return;
    }
    EventListener::once(document, DOM_CONTENT_LOADED, move |_| f()).forget();
}

/// Runs `f` every time the page becomes hidden.
pub fn on_page_hidden(document: &Document, mut f: impl FnMut() + 'static) {
    let doc = document.clone();
    EventListener::new(document, VISIBILITY_CHANGE, move |_| {
        if doc.hidden() {
            f();
        }
    })
    .forget();
}

/// Attaches `f` to `event` on `target` for the lifetime of the page.
pub fn listen_forever(target: &EventTarget, event: &'static str, mut f: impl FnMut() + 'static) {
    EventListener::new(target, event, move |_| f()).forget();
}
