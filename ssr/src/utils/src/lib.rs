pub mod dom;
pub mod error;
pub mod observer;
pub mod turn;
pub mod video_element;

pub use error::{AutoplayError, Result};
pub use video_element::DomVideo;
