//! Domain layer for the weather assistant
//!
//! Contains the weather observation, the city query/resolution types, the
//! summary and speech text types, the voice table, and domain errors.
//! This layer has no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
