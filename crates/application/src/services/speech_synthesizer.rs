//! Speech synthesizer - Optional voice rendering of a summary

use std::{fmt, sync::Arc};

use domain::{AudioClip, SpeechText, Voice};
use tracing::{debug, instrument, warn};

use crate::{notice::Notice, ports::SpeechPort};

/// Audio produced for a listen request, plus any notice raised
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeechOutcome {
    pub audio: Option<AudioClip>,
    pub notice: Option<Notice>,
}

/// Wraps the speech port; a missing port disables speech silently
#[derive(Default)]
pub struct SpeechSynthesizer {
    speech: Option<Arc<dyn SpeechPort>>,
}

impl fmt::Debug for SpeechSynthesizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpeechSynthesizer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl SpeechSynthesizer {
    /// Create a synthesizer; pass `None` when no voice credential is configured
    pub fn new(speech: Option<Arc<dyn SpeechPort>>) -> Self {
        Self { speech }
    }

    /// Create a synthesizer with speech disabled
    #[must_use]
    pub const fn disabled() -> Self {
        Self { speech: None }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.speech.is_some()
    }

    /// Synthesize sanitized text with the chosen voice
    ///
    /// Disabled speech and blank text both return no audio without a call.
    /// A failed call returns no audio and a notice.
    #[instrument(skip(self, text), fields(voice = %voice, text_len = text.as_str().len()))]
    pub async fn synthesize(&self, text: &SpeechText, voice: Voice) -> SpeechOutcome {
        let Some(speech) = &self.speech else {
            debug!("Speech disabled, skipping synthesis");
            return SpeechOutcome::default();
        };

        if text.is_blank() {
            debug!("Nothing to speak");
            return SpeechOutcome::default();
        }

        match speech.synthesize(text, voice).await {
            Ok(audio) => {
                debug!(size_bytes = audio.len(), "Speech synthesized");
                SpeechOutcome {
                    audio: Some(audio),
                    notice: None,
                }
            },
            Err(e) => {
                warn!(error = %e, "Speech synthesis failed");
                SpeechOutcome {
                    audio: None,
                    notice: Some(Notice::speech_unavailable(e.to_string())),
                }
            },
        }
    }
}
