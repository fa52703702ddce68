//! Value Objects - Immutable, identity-less domain primitives

mod audio_clip;
mod city;
mod summary_text;
mod voice;

pub use audio_clip::AudioClip;
pub use city::{CityQuery, NO_VALID_CITY, ResolvedCity};
pub use summary_text::{SpeechText, SummaryText};
pub use voice::Voice;
