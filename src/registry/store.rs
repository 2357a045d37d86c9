//! Registry store
//!
//! Read-only lookup table of installed mods, keyed by unique name.

use std::collections::HashMap;

use crate::error::RegistryError;
use crate::registry::identity::ModIdentity;

/// Mapping from mod name to identity.
///
/// Populated once at world/game load and never mutated while scripts run,
/// so it can be read from any number of threads without locking.
#[derive(Debug, Default)]
pub struct ModRegistry {
    mods: HashMap<String, ModIdentity>,
}

impl ModRegistry {
    pub fn new() -> Self {
        Self {
            mods: HashMap::new(),
        }
    }

    /// Registers a mod identity. Names are unique per session.
    pub fn register(&mut self, identity: ModIdentity) -> Result<(), RegistryError> {
        if self.mods.contains_key(&identity.name) {
            return Err(RegistryError::DuplicateMod(identity.name));
        }
        self.mods.insert(identity.name.clone(), identity);
        Ok(())
    }

    /// Looks up a mod by name. Unknown names are not an error, just absent.
    pub fn lookup(&self, name: &str) -> Option<&ModIdentity> {
        self.mods.get(name)
    }

    /// Iterates over all registered identities, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &ModIdentity> {
        self.mods.values()
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }
}
