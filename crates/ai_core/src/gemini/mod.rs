//! Google Gemini inference engine
//!
//! Talks to the Generative Language API (`/v1beta/models/{model}:generateContent`).

mod client;

pub use client::GeminiInferenceEngine;
