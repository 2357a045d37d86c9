//! Guarded filesystem operations
//!
//! The filesystem primitives scripts are allowed to reach. Every operation
//! normalizes its path once, consults the policy, and performs the raw
//! operation only on an allowing decision. Denials surface as the uniform
//! permission error; host logs keep the detail.

use log::warn;
use std::fs::{self, File};

use crate::error::GuardError;
use crate::guard::shim::{SandboxPolicy, ScriptCaller};

fn ensure(
    policy: &SandboxPolicy,
    raw: &str,
    write_required: bool,
    caller: &ScriptCaller,
    op: &str,
) -> Result<(), GuardError> {
    let decision = policy.check_path(raw, write_required, caller);
    if decision.permits(write_required) {
        Ok(())
    } else {
        warn!("Denied {} of {:?} for {:?}", op, raw, caller);
        Err(GuardError::PermissionDenied)
    }
}

/// Opens a file for reading.
pub fn open_read(
    policy: &SandboxPolicy,
    caller: &ScriptCaller,
    raw: &str,
) -> Result<File, GuardError> {
    ensure(policy, raw, false, caller, "read")?;
    Ok(File::open(raw)?)
}

/// Opens a file for writing, creating or truncating it.
pub fn open_write(
    policy: &SandboxPolicy,
    caller: &ScriptCaller,
    raw: &str,
) -> Result<File, GuardError> {
    ensure(policy, raw, true, caller, "write")?;
    Ok(File::create(raw)?)
}

/// Creates a directory, including missing parents.
pub fn create_dir(
    policy: &SandboxPolicy,
    caller: &ScriptCaller,
    raw: &str,
) -> Result<(), GuardError> {
    ensure(policy, raw, true, caller, "mkdir")?;
    Ok(fs::create_dir_all(raw)?)
}

/// Lists the entry names of a directory.
pub fn list_dir(
    policy: &SandboxPolicy,
    caller: &ScriptCaller,
    raw: &str,
) -> Result<Vec<String>, GuardError> {
    ensure(policy, raw, false, caller, "list")?;

    let mut names = Vec::new();
    for entry in fs::read_dir(raw)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    Ok(names)
}

/// Removes a file.
pub fn remove_file(
    policy: &SandboxPolicy,
    caller: &ScriptCaller,
    raw: &str,
) -> Result<(), GuardError> {
    ensure(policy, raw, true, caller, "remove")?;
    Ok(fs::remove_file(raw)?)
}

/// Removes a directory and everything under it.
pub fn remove_dir(
    policy: &SandboxPolicy,
    caller: &ScriptCaller,
    raw: &str,
) -> Result<(), GuardError> {
    ensure(policy, raw, true, caller, "rmdir")?;
    Ok(fs::remove_dir_all(raw)?)
}

/// Renames a file or directory. Needs write capability on both endpoints.
pub fn rename(
    policy: &SandboxPolicy,
    caller: &ScriptCaller,
    from: &str,
    to: &str,
) -> Result<(), GuardError> {
    ensure(policy, from, true, caller, "rename source")?;
    ensure(policy, to, true, caller, "rename target")?;
    Ok(fs::rename(from, to)?)
}
