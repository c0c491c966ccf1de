//! Narration playback

mod controller;
mod sink;

pub use controller::{NarrationController, PlaybackState};
pub use sink::{AudioHandle, AudioSink, PlaybackError};
