pub mod controller;
pub mod element;
pub mod options;
pub mod video;

pub use controller::{
    AutoplayController, FlushRequest, PlayAttempt, PlayTicket, VisibilityAction, VisibilityUpdate,
};
pub use element::MediaElement;
pub use options::AutoplayOptions;
pub use video::{ManagedVideo, PlaybackPhase, VideoKey};

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
