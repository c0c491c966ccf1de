//! # ember-narration
//!
//! Narration support: an HTTP text-to-speech client implementing the
//! `NarrationSynthesizer` port from `ember-core`, and a playback
//! controller that owns at most one live audio handle at a time.

pub mod client;
pub mod playback;

// Re-export commonly used types
pub use client::HttpNarrationClient;
pub use playback::{
    AudioHandle, AudioSink, NarrationController, PlaybackError, PlaybackState,
};
