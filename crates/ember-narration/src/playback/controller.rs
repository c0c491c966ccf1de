//! Narration playback controller
//!
//! State machine over `Idle`, `Generating`, `Playing` and `Paused`. The
//! controller holds at most one live audio handle; starting a new
//! narration rewinds, pauses and releases the previous one before
//! synthesis begins.

use std::sync::Arc;

use tracing::{info, warn};

use ember_core::error::DomainError;
use ember_core::traits::NarrationSynthesizer;

use super::sink::{AudioHandle, AudioSink};

/// Playback controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Generating,
    Playing,
    Paused,
}

/// Narration playback controller
pub struct NarrationController<S: AudioSink> {
    synthesizer: Arc<dyn NarrationSynthesizer>,
    sink: S,
    state: PlaybackState,
    handle: Option<S::Handle>,
}

impl<S: AudioSink> NarrationController<S> {
    /// Create a controller in the idle state
    pub fn new(synthesizer: Arc<dyn NarrationSynthesizer>, sink: S) -> Self {
        Self {
            synthesizer,
            sink,
            state: PlaybackState::Idle,
            handle: None,
        }
    }

    /// Current state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether a live audio handle exists (at most one, ever)
    pub fn has_live_handle(&self) -> bool {
        self.handle.is_some()
    }

    /// Synthesize a narration and start playing it.
    ///
    /// Returns `Ok(false)` without doing anything when a generation is
    /// already in flight. On synthesis or playback-start failure the
    /// controller returns to idle with no dangling handle and the error
    /// propagates for user-facing notification.
    pub async fn generate_and_play(
        &mut self,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<bool, DomainError> {
        if self.state == PlaybackState::Generating {
            return Ok(false);
        }

        // Stop and release any previous narration before starting.
        self.stop();
        self.state = PlaybackState::Generating;

        let clip = match self.synthesizer.synthesize(title, content).await {
            Ok(clip) => clip,
            Err(e) => {
                self.state = PlaybackState::Idle;
                return Err(e);
            }
        };

        match self.sink.start(clip) {
            Ok(handle) => {
                self.handle = Some(handle);
                self.state = PlaybackState::Playing;
                info!("narration started");
                Ok(true)
            }
            Err(e) => {
                self.state = PlaybackState::Idle;
                Err(DomainError::NarrationError(e.to_string()))
            }
        }
    }

    /// Toggle between playing and paused; a no-op in any other state
    pub fn toggle_playback(&mut self) {
        match self.state {
            PlaybackState::Playing => {
                if let Some(handle) = self.handle.as_mut() {
                    if handle.pause().is_ok() {
                        self.state = PlaybackState::Paused;
                        return;
                    }
                }
                self.release_handle();
            }
            PlaybackState::Paused => {
                if let Some(handle) = self.handle.as_mut() {
                    if handle.resume().is_ok() {
                        self.state = PlaybackState::Playing;
                        return;
                    }
                }
                self.release_handle();
            }
            PlaybackState::Idle | PlaybackState::Generating => {}
        }
    }

    /// Stop playback: rewind, pause, release the handle, return to idle
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.rewind().ok();
            handle.pause().ok();
        }
        if self.state != PlaybackState::Generating {
            self.state = PlaybackState::Idle;
        }
    }

    /// Observe natural end-of-audio or a device error, releasing the
    /// handle so repeated narrations never accumulate resources
    pub fn poll(&mut self) {
        let done = self
            .handle
            .as_ref()
            .map(|h| h.is_finished() || h.has_errored());

        match done {
            Some(true) => {
                if self.handle.as_ref().is_some_and(AudioHandle::has_errored) {
                    warn!("narration playback errored");
                }
                self.release_handle();
            }
            Some(false) | None => {}
        }
    }

    fn release_handle(&mut self) {
        self.handle = None;
        self.state = PlaybackState::Idle;
    }
}
