//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod form_system;
pub mod telemetry;
pub mod error;

pub use form_system::*;
pub use telemetry::*;
pub use error::*;
