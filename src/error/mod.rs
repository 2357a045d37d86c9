//! Error handling
//!
//! Defines error types and handling for the mod sandbox.

pub mod types;

pub use types::*;
