//! Domain layer of Stylist: prompt composition, session history and the
//! completion gateway port.

pub mod completion;
pub mod config;
pub mod error;
pub mod history;
pub mod prompt;

// Re-export common error type
pub use error::{Result, StylistError};
