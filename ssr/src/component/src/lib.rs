pub mod autoplay_video;

pub use autoplay_video::AutoplayVideo;
