//! The identifier form: input validation, submission gate and fetch bookkeeping.

pub mod error;
pub mod state;

pub use error::*;
pub use state::*;
