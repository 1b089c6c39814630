use consts::AUTOPLAY_MARKER_VALUE;
use leptos::{html::Video, prelude::*};

/// A `<video>` carrying the autoplay marker, so the page-level controller
/// picks it up once the document is ready.
///
/// Renders muted and inline from the start; the controller re-asserts both
/// before every automatic play.
#[component]
pub fn AutoplayVideo(
    #[prop(into)] src: Signal<String>,
    #[prop(optional, into)] poster: Option<String>,
    /// Overrides the controller's `preload="none"` default.
    #[prop(optional, into)]
    preload: Option<String>,
    /// With controls, a user pause sticks until the user resumes.
    #[prop(optional)]
    controls: bool,
    #[prop(optional)] looping: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<Video>,
) -> impl IntoView {
    view! {
        <video
            node_ref=node_ref
            class=class
            data-autoplay=AUTOPLAY_MARKER_VALUE
            src=src
            poster=poster
            preload=preload
            controls=controls
            loop=looping
            muted=true
            playsinline=true
        ></video>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn renders_marker_and_inline_attrs() {
        let html = view! { <AutoplayVideo src="/clips/intro.mp4".to_string() /> }.to_html();

        assert!(html.contains(r#"data-autoplay="true""#));
        assert!(html.contains(r#"src="/clips/intro.mp4""#));
        assert!(html.contains("muted"));
        assert!(html.contains("playsinline"));
        assert!(!html.contains("controls"));
        assert!(!html.contains("preload"));
    }

    #[test]
    fn keeps_declared_preload_and_controls() {
        let html = view! {
            <AutoplayVideo src="/clips/intro.mp4".to_string() preload="metadata" controls=true />
        }
        .to_html();

        assert!(html.contains(r#"preload="metadata""#));
        assert!(html.contains("controls"));
    }
}
