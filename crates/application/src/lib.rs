//! Application layer - Use cases and orchestration
//!
//! Contains the request-cycle orchestration, the services it sequences, and
//! the port definitions that infrastructure adapters implement.

pub mod error;
pub mod notice;
pub mod ports;
pub mod services;
pub mod session;

pub use error::ApplicationError;
pub use notice::{Notice, NoticeKind, Severity};
pub use ports::*;
pub use services::*;
pub use session::SessionContext;
