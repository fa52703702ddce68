//! Infrastructure layer - Adapters, configuration, and logging
//!
//! Implements the application ports over the integration crates and wires
//! them into a ready-to-use assistant.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::build_assistant;
pub use config::{
    AppConfig, ConfigError, InferenceAppConfig, SpeechAppConfig, WeatherAppConfig,
};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_tracing};
