/// Playback surface the controller drives.
///
/// Implemented by the DOM adapter in the browser and by test doubles
/// elsewhere. Attribute writes are fire-and-forget; implementations log
/// failures themselves.
pub trait MediaElement {
    /// Outcome handle of a playback start, e.g. the promise returned by
    /// `HTMLMediaElement.play()`.
    type Pending;

    fn has_attribute(&self, name: &str) -> bool;
    fn set_attribute(&self, name: &str, value: &str);

    fn set_muted(&self, muted: bool);
    fn set_plays_inline(&self, plays_inline: bool);

    /// Requests playback. `None` when the platform gives nothing to observe.
    fn play(&self) -> Option<Self::Pending>;
    fn pause(&self);
}
