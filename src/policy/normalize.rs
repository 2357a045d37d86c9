//! Path normalization
//!
//! Turns raw path strings into canonical absolute paths that the policy
//! engine can compare by prefix containment.

use std::ffi::OsString;
use std::fs;
use std::path::{Component, PathBuf};

use crate::error::PathError;

/// Canonicalizes `raw` into an absolute path with `.`, `..`, redundant
/// separators and symlinks resolved by the filesystem itself, so a symlink
/// pointing out of a permitted directory cannot slip past containment.
///
/// The path does not have to exist: when full canonicalization fails,
/// trailing components are stripped one at a time until the remaining prefix
/// resolves, then appended back onto the canonical prefix. A check on a file
/// about to be created is thereby made against the directory that will
/// actually contain it. A `..` among the stripped components fails the whole
/// normalization, since traversal through a directory that does not exist
/// cannot be resolved against the real filesystem.
pub fn normalize(raw: &str) -> Result<PathBuf, PathError> {
    if raw.is_empty() {
        return Err(PathError::Malformed("empty path".to_string()));
    }
    if raw.contains('\0') {
        return Err(PathError::Malformed("embedded NUL byte".to_string()));
    }

    if let Ok(resolved) = fs::canonicalize(raw) {
        return Ok(resolved);
    }

    let mut prefix = PathBuf::from(raw);
    let mut missing: Vec<OsString> = Vec::new();
    loop {
        match prefix.components().next_back() {
            Some(Component::Normal(name)) => missing.push(name.to_os_string()),
            Some(Component::CurDir) => {}
            Some(Component::ParentDir) => {
                return Err(PathError::Traversal(raw.to_string()));
            }
            Some(Component::RootDir) | Some(Component::Prefix(_)) | None => {
                return Err(PathError::Malformed(format!(
                    "no resolvable ancestor: {}",
                    raw
                )));
            }
        }

        if !prefix.pop() || prefix.as_os_str().is_empty() {
            return Err(PathError::Malformed(format!(
                "no resolvable ancestor: {}",
                raw
            )));
        }

        if let Ok(resolved) = fs::canonicalize(&prefix) {
            let mut out = resolved;
            for name in missing.iter().rev() {
                out.push(name);
            }
            return Ok(out);
        }
    }
}
