//! Speech provider implementations

pub mod elevenlabs;
