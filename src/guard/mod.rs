//! Enforcement guard
//!
//! Everything a script-originated filesystem call goes through: the
//! process-wide policy mode and the guarded filesystem operations.

pub mod operations;
pub mod shim;

pub use operations::{
    create_dir, list_dir, open_read, open_write, remove_dir, remove_file, rename,
};
pub use shim::{SandboxPolicy, ScriptCaller};
