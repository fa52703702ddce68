//! AI Core - Language-model inference
//!
//! Provides the inference port and a Google Gemini implementation using the
//! `generateContent` REST endpoint.

pub mod config;
pub mod error;
pub mod gemini;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use gemini::GeminiInferenceEngine;
pub use ports::{InferenceEngine, InferenceRequest, InferenceResponse, TokenUsage};
