//! Adapters implementing application ports

mod gemini_inference_adapter;
mod location_adapter;
mod speech_adapter;
mod weather_adapter;

pub use gemini_inference_adapter::GeminiInferenceAdapter;
pub use location_adapter::LocationAdapter;
pub use speech_adapter::SpeechAdapter;
pub use weather_adapter::WeatherAdapter;
