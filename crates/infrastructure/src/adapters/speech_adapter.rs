//! Speech adapter - Implements SpeechPort using ai_speech crate

use ai_speech::{ElevenLabsProvider, SpeechConfig, SpeechError, TextToSpeech};
use application::error::ApplicationError;
use application::ports::SpeechPort;
use async_trait::async_trait;
use domain::{AudioClip, SpeechText, Voice};
use tracing::{debug, instrument};

/// Adapter for ElevenLabs text-to-speech
#[derive(Debug)]
pub struct SpeechAdapter {
    provider: ElevenLabsProvider,
}

impl SpeechAdapter {
    /// Create a new speech adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        debug!(
            base_url = %config.base_url,
            default_voice = %config.default_voice_id,
            "Speech provider configured"
        );
        let provider = ElevenLabsProvider::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;

        Ok(Self { provider })
    }

    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::RateLimited => ApplicationError::RateLimited,
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl SpeechPort for SpeechAdapter {
    #[instrument(skip(self, text), fields(voice = %voice, model = self.provider.model_name()))]
    async fn synthesize(
        &self,
        text: &SpeechText,
        voice: Voice,
    ) -> Result<AudioClip, ApplicationError> {
        let audio = self
            .provider
            .synthesize(text.as_str(), Some(voice.id()))
            .await
            .map_err(Self::map_error)?;

        let content_type = audio.content_type().to_string();
        Ok(AudioClip::new(audio.into_data(), content_type))
    }
}
