//! Mod discovery
//!
//! Scans install directories for mods at load time.

use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::error::RegistryError;
use crate::registry::identity::ModIdentity;
use crate::registry::store::ModRegistry;

/// Entry script every mod must carry to be loadable.
const MOD_ENTRY_SCRIPT: &str = "init.lua";

/// Checks mod name format: lowercase alphanumerics and underscores only.
fn is_valid_mod_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Scans `dir` for installed mods and registers each one found.
///
/// A mod is an immediate subdirectory containing an `init.lua`. Entries with
/// invalid names are skipped with a warning rather than failing the scan;
/// a duplicate of an already registered name does fail it. Install
/// directories are canonicalized here so the policy engine only ever
/// compares canonical paths.
///
/// Returns the number of mods registered from this directory.
pub fn discover_mods(registry: &mut ModRegistry, dir: &Path) -> Result<usize, RegistryError> {
    let mut count = 0;

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        if !is_valid_mod_name(&name) {
            warn!("Skipping mod directory with invalid name: {:?}", path);
            continue;
        }

        if !path.join(MOD_ENTRY_SCRIPT).is_file() {
            continue;
        }

        let install_dir = path.canonicalize()?;
        registry.register(ModIdentity::new(&name, install_dir))?;
        info!("Registered mod '{}'", name);
        count += 1;
    }

    Ok(count)
}
