use js_sys::Array;
use state::{AutoplayOptions, VisibilityUpdate};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{error::AutoplayError, Result};

/// Builds an observer with the margins and thresholds from `options` and
/// hands each entry's target and visibility to `on_entry`.
///
/// The callback closure is leaked; the observer lives as long as the page.
pub fn visibility_observer(
    options: &AutoplayOptions,
    mut on_entry: impl FnMut(Element, VisibilityUpdate) + 'static,
) -> Result<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                let update = VisibilityUpdate {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                on_entry(entry.target(), update);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin);
    let thresholds: Array = options
        .thresholds
        .iter()
        .map(|t| JsValue::from_f64(*t))
        .collect();
    init.set_threshold(&thresholds);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(AutoplayError::observer)?;
    callback.forget();
    Ok(observer)
}
