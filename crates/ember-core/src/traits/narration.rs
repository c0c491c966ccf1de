//! Narration synthesizer port
//!
//! Wraps a third-party text-to-speech service. The playback side lives in
//! the narration crate; the domain only cares about "text in, audio out".

use async_trait::async_trait;

use crate::error::DomainError;

/// Synthesized audio payload. The byte format is whatever the narration
/// service returns; the domain treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl AudioClip {
    /// Create a new AudioClip
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    /// Payload size in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the service returned no audio
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[async_trait]
pub trait NarrationSynthesizer: Send + Sync {
    /// Convert a confession's title and body into spoken audio. Any
    /// service failure is reported uniformly as a narration error.
    async fn synthesize(
        &self,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<AudioClip, DomainError>;
}
