//! `tickstream-core` — configuration and shared error type for the
//! tickstream workspace.

pub mod config;
pub mod error;

pub use config::TickstreamConfig;
pub use error::{Result, TickstreamError};
