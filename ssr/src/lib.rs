pub mod app;

use std::cell::Cell;

pub use app::{init_autoplay_videos, Autoplay};
pub use component::AutoplayVideo;
pub use state::AutoplayOptions;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);

    start_when_ready(AutoplayOptions::default());
}

/// Manual entry for hosts that load the module without the `hydrate` start
/// hook.
#[cfg(not(feature = "hydrate"))]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = initAutoplayVideos)]
pub fn init_autoplay_videos_js() {
    start_when_ready(AutoplayOptions::default());
}

/// Initializes the controller once the document has been parsed. Only the
/// first call per page has any effect.
pub fn start_when_ready(options: AutoplayOptions) {
    if STARTED.with(|started| started.replace(true)) {
        log::debug!("autoplay: already started");
        return;
    }

    let document = match utils::dom::document() {
        Ok(document) => document,
        Err(e) => {
            log::error!("autoplay: {e}");
            return;
        }
    };
    utils::dom::on_ready(&document, move || {
        if let Err(e) = init_autoplay_videos(options) {
            log::error!("autoplay: initialization failed: {e}");
        }
    });
}
