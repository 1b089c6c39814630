use consts::{CONTROLS_ATTR, MUTED_ATTR, PLAYS_INLINE_ATTR, PRELOAD_ATTR};

use crate::{
    element::MediaElement,
    options::AutoplayOptions,
    video::{ManagedVideo, PlaybackPhase, VideoKey},
};

/// Asks the driver to run [`AutoplayController::flush_deferred`] on the next
/// scheduling turn. Issued by every controlled pause; a flush only clears the
/// marker if no later controlled pause of the same video superseded it.
#[must_use = "auto-pause markers stay set until the flush runs"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlushRequest {
    key: VideoKey,
    pause: u64,
}

impl FlushRequest {
    pub fn key(&self) -> VideoKey {
        self.key
    }
}

/// Identifies one controlled play, so a late rejection of an older attempt
/// cannot touch a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTicket {
    key: VideoKey,
    attempt: u64,
}

impl PlayTicket {
    pub fn key(&self) -> VideoKey {
        self.key
    }
}

#[derive(Debug, PartialEq)]
pub struct PlayAttempt<P> {
    pub ticket: PlayTicket,
    pub pending: P,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityUpdate {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, PartialEq)]
pub enum VisibilityAction<P> {
    /// Controlled play ran. `None` if it was gated or yielded no handle.
    Play(Option<PlayAttempt<P>>),
    Pause(Option<FlushRequest>),
}

struct Entry<E> {
    element: E,
    state: ManagedVideo,
    pauses: u64,
    play_attempts: u64,
}

pub struct AutoplayController<E: MediaElement> {
    videos: Vec<Entry<E>>,
    options: AutoplayOptions,
}

fn ensure_autoplay_compatible<E: MediaElement>(element: &E) {
    element.set_muted(true);
    element.set_attribute(MUTED_ATTR, "");
    if !element.has_attribute(PLAYS_INLINE_ATTR) {
        element.set_attribute(PLAYS_INLINE_ATTR, "");
    }
    element.set_plays_inline(true);
}

impl<E: MediaElement> AutoplayController<E> {
    /// Takes ownership of the discovered elements and prepares each one for
    /// muted inline autoplay.
    pub fn new(elements: impl IntoIterator<Item = E>, options: AutoplayOptions) -> Self {
        let videos = elements
            .into_iter()
            .map(|element| {
                ensure_autoplay_compatible(&element);
                if !element.has_attribute(PRELOAD_ATTR) {
                    element.set_attribute(PRELOAD_ATTR, &options.default_preload);
                }
                Entry {
                    element,
                    state: ManagedVideo::default(),
                    pauses: 0,
                    play_attempts: 0,
                }
            })
            .collect();

        Self { videos, options }
    }

    pub fn options(&self) -> &AutoplayOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = VideoKey> {
        (0..self.videos.len()).map(VideoKey)
    }

    pub fn element(&self, key: VideoKey) -> Option<&E> {
        self.videos.get(key.0).map(|e| &e.element)
    }

    pub fn video(&self, key: VideoKey) -> Option<&ManagedVideo> {
        self.videos.get(key.0).map(|e| &e.state)
    }

    /// Finds the key of the first element matching `pred`.
    pub fn find(&self, mut pred: impl FnMut(&E) -> bool) -> Option<VideoKey> {
        self.videos
            .iter()
            .position(|e| pred(&e.element))
            .map(VideoKey)
    }

    /// Starts playback unless the user paused this video.
    pub fn safe_play(&mut self, key: VideoKey) -> Option<PlayAttempt<E::Pending>> {
        let entry = self.videos.get_mut(key.0)?;
        if entry.state.user_paused {
            return None;
        }
        ensure_autoplay_compatible(&entry.element);
        entry.play_attempts += 1;

        let Some(pending) = entry.element.play() else {
            entry.state.phase = PlaybackPhase::Idle;
            return None;
        };
        entry.state.phase = PlaybackPhase::Playing;
        Some(PlayAttempt {
            ticket: PlayTicket {
                key,
                attempt: entry.play_attempts,
            },
            pending,
        })
    }

    /// Pauses on the controller's behalf. The auto-pause marker stays set
    /// until the returned request is flushed.
    pub fn safe_pause(&mut self, key: VideoKey) -> Option<FlushRequest> {
        let entry = self.videos.get_mut(key.0)?;
        entry.state.auto_paused = true;
        if !entry.state.user_paused {
            entry.state.phase = PlaybackPhase::PausedAuto;
        }
        entry.pauses += 1;
        entry.element.pause();

        Some(FlushRequest {
            key,
            pause: entry.pauses,
        })
    }

    /// Clears the auto-pause marker left by the pause `flush` was issued
    /// for. Stale requests are ignored.
    pub fn flush_deferred(&mut self, flush: FlushRequest) {
        let Some(entry) = self.videos.get_mut(flush.key.0) else {
            return;
        };
        if entry.pauses == flush.pause {
            entry.state.auto_paused = false;
        }
    }

    pub fn on_pause_event(&mut self, key: VideoKey) {
        let Some(entry) = self.videos.get_mut(key.0) else {
            return;
        };
        if entry.state.auto_paused {
            return;
        }
        if entry.element.has_attribute(CONTROLS_ATTR) {
            entry.state.user_paused = true;
            entry.state.phase = PlaybackPhase::PausedByUser;
        } else {
            entry.state.phase = PlaybackPhase::PausedAuto;
        }
    }

    /// Any resumption hands the video back to automatic management.
    pub fn on_play_event(&mut self, key: VideoKey) {
        let Some(entry) = self.videos.get_mut(key.0) else {
            return;
        };
        entry.state.user_paused = false;
        entry.state.phase = PlaybackPhase::Playing;
    }

    /// Records a rejected playback start. Nothing else happens: no retry,
    /// no log. Rejections of superseded attempts are ignored.
    pub fn on_play_rejected(&mut self, ticket: PlayTicket) {
        let Some(entry) = self.videos.get_mut(ticket.key.0) else {
            return;
        };
        if entry.play_attempts == ticket.attempt && entry.state.phase == PlaybackPhase::Playing {
            entry.state.phase = PlaybackPhase::Idle;
        }
    }

    pub fn on_visibility(
        &mut self,
        key: VideoKey,
        update: VisibilityUpdate,
    ) -> VisibilityAction<E::Pending> {
        if let Some(entry) = self.videos.get_mut(key.0) {
            entry.state.visibility_ratio = update.ratio;
        }

        if update.is_intersecting && update.ratio >= self.options.play_ratio {
            VisibilityAction::Play(self.safe_play(key))
        } else {
            VisibilityAction::Pause(self.safe_pause(key))
        }
    }

    /// Pauses every managed video, whatever its intersection state.
    pub fn on_page_hidden(&mut self) -> Vec<FlushRequest> {
        let keys: Vec<_> = self.keys().collect();
        keys.into_iter()
            .filter_map(|key| self.safe_pause(key))
            .collect()
    }

    /// Fallback without visibility tracking: one controlled play per video.
    pub fn play_all(&mut self) -> Vec<PlayAttempt<E::Pending>> {
        let keys: Vec<_> = self.keys().collect();
        keys.into_iter()
            .filter_map(|key| self.safe_play(key))
            .collect()
    }
}
