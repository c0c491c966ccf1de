//! Audio sink port
//!
//! The controller does not talk to an audio device directly; it drives an
//! `AudioSink` that turns synthesized clips into playable handles. The
//! handle is single-owner: dropping it releases the underlying resource.

use thiserror::Error;

use ember_core::traits::AudioClip;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Failed to start playback: {0}")]
    StartFailed(String),

    #[error("Playback device error: {0}")]
    Device(String),
}

/// A live playback handle for one audio clip
pub trait AudioHandle: Send {
    /// Pause playback, keeping the current position
    fn pause(&mut self) -> Result<(), PlaybackError>;

    /// Resume playback from the current position
    fn resume(&mut self) -> Result<(), PlaybackError>;

    /// Rewind to the beginning
    fn rewind(&mut self) -> Result<(), PlaybackError>;

    /// Whether the clip has played to its natural end
    fn is_finished(&self) -> bool;

    /// Whether the underlying device reported a playback error
    fn has_errored(&self) -> bool;
}

/// Turns audio clips into playback handles
pub trait AudioSink: Send {
    type Handle: AudioHandle;

    /// Start playing a clip, returning the handle that owns it
    fn start(&mut self, clip: AudioClip) -> Result<Self::Handle, PlaybackError>;
}
