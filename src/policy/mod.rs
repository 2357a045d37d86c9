//! Access policy
//!
//! Path normalization and the pure decision engine for the mod sandbox.

pub mod engine;
pub mod normalize;
pub mod results;

pub use engine::{AccessRequest, evaluate, path_contains};
pub use normalize::normalize;
pub use results::AccessDecision;
