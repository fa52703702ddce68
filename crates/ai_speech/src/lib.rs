//! AI Speech - Text-to-Speech abstractions
//!
//! Provides the `TextToSpeech` port and an ElevenLabs implementation.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{ElevenLabsProvider, SpeechConfig, TextToSpeech};
//!
//! let provider = ElevenLabsProvider::new(config)?;
//! let audio = provider.synthesize("Sunny and 20 degrees in Rome.", None).await?;
//! std::fs::write("answer.mp3", audio.data())?;
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::TextToSpeech;
pub use providers::elevenlabs::ElevenLabsProvider;
pub use types::{AudioData, VoiceSettings};
