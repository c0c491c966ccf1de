//! HTTP text-to-speech client
//!
//! Wraps an ElevenLabs-style narration API. Any service failure is
//! reported uniformly as a narration error; the caller does not get to
//! distinguish HTTP failures from synthesis failures.

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, instrument};

use ember_common::NarrationConfig;
use ember_core::error::DomainError;
use ember_core::traits::{AudioClip, NarrationSynthesizer};

/// Narration client backed by an HTTP text-to-speech API
#[derive(Clone)]
pub struct HttpNarrationClient {
    http: reqwest::Client,
    config: NarrationConfig,
}

impl HttpNarrationClient {
    /// Create a client from narration configuration
    pub fn new(config: NarrationConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::NarrationError(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Compose the spoken text from an optional title and body
    fn narration_text(title: Option<&str>, content: Option<&str>) -> String {
        match (title, content) {
            (Some(title), Some(content)) => format!("{title}. {content}"),
            (Some(title), None) => title.to_string(),
            (None, Some(content)) => content.to_string(),
            (None, None) => String::new(),
        }
    }
}

#[async_trait]
impl NarrationSynthesizer for HttpNarrationClient {
    #[instrument(skip(self, title, content))]
    async fn synthesize(
        &self,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<AudioClip, DomainError> {
        let text = Self::narration_text(title, content);
        if text.is_empty() {
            return Err(DomainError::NarrationError(
                "nothing to narrate".to_string(),
            ));
        }

        let url = format!(
            "{}/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.voice_id
        );

        let response = self
            .http
            .post(&url)
            .header("xi-api-key", &self.config.api_key)
            .header("accept", "audio/mpeg")
            .json(&json!({
                "text": text,
                "model_id": self.config.model_id,
            }))
            .send()
            .await
            .map_err(|e| DomainError::NarrationError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::NarrationError(format!(
                "narration service returned {}",
                response.status()
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("audio/mpeg")
            .to_string();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::NarrationError(e.to_string()))?;

        debug!(bytes = bytes.len(), "narration synthesized");

        Ok(AudioClip::new(bytes.to_vec(), content_type))
    }
}
