//! ElevenLabs Speech Provider
//!
//! Implements `TextToSpeech` using the ElevenLabs `/v1/text-to-speech/{voice_id}`
//! endpoint. Audio is returned as MPEG.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, VoiceSettings};

/// Synthesis model used for every request
pub const MODEL_ID: &str = "eleven_monolingual_v1";

const AUDIO_MPEG: &str = "audio/mpeg";

/// ElevenLabs text-to-speech provider
#[derive(Debug, Clone)]
pub struct ElevenLabsProvider {
    client: Client,
    config: SpeechConfig,
}

impl ElevenLabsProvider {
    /// Create a new ElevenLabs provider
    ///
    /// # Arguments
    ///
    /// * `config` - Speech configuration
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
        })?;

        debug!(base_url = %config.base_url, "ElevenLabs provider initialized");

        Ok(Self { client, config })
    }

    /// Get the API key
    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    /// Build the TTS endpoint URL for a voice
    fn tts_url(&self, voice_id: &str) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            voice_id
        )
    }

    /// Map a non-2xx response to an error
    fn status_error(status: StatusCode, body: &str, voice_id: &str) -> SpeechError {
        let detail = serde_json::from_str::<ApiError>(body).map_or_else(
            |_| format!("HTTP {status}: {body}"),
            |e| e.detail.message(),
        );

        match status {
            StatusCode::TOO_MANY_REQUESTS => SpeechError::RateLimited,
            StatusCode::UNAUTHORIZED => SpeechError::Unauthorized(detail),
            StatusCode::NOT_FOUND => SpeechError::VoiceNotFound(voice_id.to_string()),
            s if s.is_server_error() => SpeechError::ServiceUnavailable(detail),
            _ => SpeechError::SynthesisFailed(detail),
        }
    }
}

/// ElevenLabs TTS request body
#[derive(Debug, Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs error body: `{"detail": {"status": "...", "message": "..."}}` or `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ApiError {
    detail: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorDetail {
    Structured {
        #[serde(default)]
        status: Option<String>,
        message: String,
    },
    Plain(String),
    Other(serde_json::Value),
}

impl ApiErrorDetail {
    fn message(self) -> String {
        match self {
            Self::Structured {
                status: Some(status),
                message,
            } => format!("{status}: {message}"),
            Self::Structured { message, .. } | Self::Plain(message) => message,
            Self::Other(value) => value.to_string(),
        }
    }
}

#[async_trait]
impl TextToSpeech for ElevenLabsProvider {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn synthesize(
        &self,
        text: &str,
        voice_id: Option<&str>,
    ) -> Result<AudioData, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        let voice_id = voice_id.unwrap_or(&self.config.default_voice_id);
        debug!(voice_id, "Synthesizing speech with ElevenLabs");

        let request = TtsRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings::FIXED,
        };

        let response = self
            .client
            .post(self.tts_url(voice_id))
            .header("xi-api-key", self.api_key())
            .header(header::ACCEPT, AUDIO_MPEG)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(%status, "Speech synthesis failed");
            return Err(Self::status_error(status, &error_body, voice_id));
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(AUDIO_MPEG)
            .to_string();

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {e}")))?;

        if audio_bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Provider returned no audio".to_string(),
            ));
        }

        debug!(audio_size = audio_bytes.len(), "Speech synthesis complete");

        Ok(AudioData::new(audio_bytes.to_vec(), content_type))
    }

    fn model_name(&self) -> &str {
        MODEL_ID
    }

    fn default_voice(&self) -> &str {
        &self.config.default_voice_id
    }
}
