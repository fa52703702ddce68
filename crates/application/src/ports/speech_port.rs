//! Speech port - Interface for text-to-speech

use async_trait::async_trait;
use domain::{AudioClip, SpeechText, Voice};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Synthesize sanitized text with the given voice
    async fn synthesize(
        &self,
        text: &SpeechText,
        voice: Voice,
    ) -> Result<AudioClip, ApplicationError>;
}
