//! Mod registry
//!
//! Tracks installed mods and their identities. Populated once at world load,
//! read-only while scripts run.

pub mod discovery;
pub mod identity;
pub mod store;

pub use discovery::discover_mods;
pub use identity::{BUILTIN_MOD_NAME, ModIdentity};
pub use store::ModRegistry;
