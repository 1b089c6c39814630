/// Marks a `<video>` as managed by the autoplay controller.
pub const AUTOPLAY_MARKER_ATTR: &str = "data-autoplay";
pub const AUTOPLAY_MARKER_VALUE: &str = "true";
pub const AUTOPLAY_SELECTOR: &str = r#"video[data-autoplay="true"]"#;

pub const MUTED_ATTR: &str = "muted";
pub const PLAYS_INLINE_ATTR: &str = "playsinline";
pub const PRELOAD_ATTR: &str = "preload";
pub const CONTROLS_ATTR: &str = "controls";

/// Preload hint applied when the page declares none
pub const DEFAULT_PRELOAD: &str = "none";

pub mod visibility {
    /// Extends the viewport by 200px above and below
    pub const ROOT_MARGIN: &str = "200px 0px 200px 0px";
    pub const THRESHOLDS: [f64; 2] = [0.0, PLAY_RATIO];
    /// Minimum visible fraction before playback starts
    pub const PLAY_RATIO: f64 = 0.25;
}

pub mod dom {
    pub const INTERSECTION_OBSERVER: &str = "IntersectionObserver";
    pub const DOCUMENT_LOADING: &str = "loading";
    pub const DOM_CONTENT_LOADED: &str = "DOMContentLoaded";
    pub const VISIBILITY_CHANGE: &str = "visibilitychange";
    pub const PLAYS_INLINE_PROP: &str = "playsInline";
}
