/// Identity of a managed element: its position in discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoKey(pub usize);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Playing,
    PausedByUser,
    PausedAuto,
}

/// Per-video autoplay record owned by the controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManagedVideo {
    pub(crate) user_paused: bool,
    pub(crate) auto_paused: bool,
    pub(crate) visibility_ratio: f64,
    pub(crate) phase: PlaybackPhase,
}

impl ManagedVideo {
    pub fn user_paused(&self) -> bool {
        self.user_paused
    }

    /// Only set between a controlled pause and the next turn flush.
    pub fn auto_paused(&self) -> bool {
        self.auto_paused
    }

    pub fn visibility_ratio(&self) -> f64 {
        self.visibility_ratio
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }
}
