//! Application services - Use case implementations

mod city_resolver;
mod orchestrator;
mod speech_synthesizer;
mod summary_generator;

pub use city_resolver::{CityResolution, CityResolver, extraction_prompt};
pub use orchestrator::{CycleOutcome, CycleReport, CycleState, FailureKind, WeatherAssistant};
pub use speech_synthesizer::{SpeechOutcome, SpeechSynthesizer};
pub use summary_generator::{SummaryGenerationFailed, SummaryGenerator, summary_prompt};
