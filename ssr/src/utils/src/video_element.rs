use consts::dom::PLAYS_INLINE_PROP;
use js_sys::{Promise, Reflect};
use state::MediaElement;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlVideoElement};

/// A `<video>` in the live document.
#[derive(Clone, Debug, PartialEq)]
pub struct DomVideo(HtmlVideoElement);

impl DomVideo {
    pub fn new(video: HtmlVideoElement) -> Self {
        Self(video)
    }

    pub fn video(&self) -> &HtmlVideoElement {
        &self.0
    }

    /// Identity comparison against an observer or event target.
    pub fn is(&self, target: &Element) -> bool {
        let target: &JsValue = target.as_ref();
        let own: &JsValue = self.0.as_ref();
        target == own
    }
}

impl MediaElement for DomVideo {
    type Pending = Promise;

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            log::warn!("autoplay: failed to set `{name}` on video: {e:?}");
        }
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }

    fn set_plays_inline(&self, plays_inline: bool) {
        // not every web-sys build exposes `playsInline` on the element
        _ = Reflect::set(
            &self.0,
            &JsValue::from_str(PLAYS_INLINE_PROP),
            &JsValue::from_bool(plays_inline),
        );
    }

    fn play(&self) -> Option<Promise> {
        self.0.play().ok()
    }

    fn pause(&self) {
        _ = self.0.pause();
    }
}
