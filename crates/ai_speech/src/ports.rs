//! Port definitions for speech synthesis
//!
//! Defines the trait that text-to-speech providers implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::AudioData;

/// Port for Text-to-Speech (TTS) implementations
///
/// Implementations of this trait convert text to audio speech.
///
/// # Example
///
/// ```ignore
/// use ai_speech::{SpeechError, TextToSpeech};
///
/// async fn speak(tts: &impl TextToSpeech, text: &str) -> Result<Vec<u8>, SpeechError> {
///     let audio = tts.synthesize(text, None).await?;
///     Ok(audio.into_data())
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `voice_id` - Provider voice id (uses the default if None)
    ///
    /// # Returns
    ///
    /// Returns `AudioData` containing the synthesized speech.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str, voice_id: Option<&str>)
    -> Result<AudioData, SpeechError>;

    /// Get the name of the synthesis model
    fn model_name(&self) -> &str;

    /// Get the default voice id
    fn default_voice(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTextToSpeech;

    #[async_trait]
    impl TextToSpeech for EchoTextToSpeech {
        async fn synthesize(
            &self,
            text: &str,
            voice_id: Option<&str>,
        ) -> Result<AudioData, SpeechError> {
            if let Some(id) = voice_id.filter(|id| id.is_empty()) {
                return Err(SpeechError::VoiceNotFound(id.to_string()));
            }
            Ok(AudioData::new(text.as_bytes().to_vec(), "audio/mpeg"))
        }

        fn model_name(&self) -> &str {
            "echo"
        }

        fn default_voice(&self) -> &str {
            "default"
        }
    }

    #[tokio::test]
    async fn trait_is_usable_as_object() {
        let tts: Box<dyn TextToSpeech> = Box::new(EchoTextToSpeech);
        let audio = tts.synthesize("hi", None).await.unwrap();
        assert_eq!(audio.data(), b"hi");
        assert_eq!(tts.model_name(), "echo");
        assert_eq!(tts.default_voice(), "default");
    }

    #[tokio::test]
    async fn errors_propagate() {
        let tts = EchoTextToSpeech;
        assert!(matches!(
            tts.synthesize("hi", Some("")).await,
            Err(SpeechError::VoiceNotFound(_))
        ));
    }
}
