//! Sandbox policy modes
//!
//! The process-wide switch between unrestricted and sandboxed filesystem
//! access, and the checking pipeline every script call runs through.

use log::warn;
use std::path::PathBuf;

use crate::policy::{self, AccessDecision, AccessRequest};
use crate::registry::{BUILTIN_MOD_NAME, ModIdentity, ModRegistry};
use crate::world::{GameSpec, WorldLayout};

/// Identity of the script context performing a filesystem call, as reported
/// by the scripting runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCaller {
    /// The engine's own trusted script package.
    Builtin,
    /// A mod, by name. The name does not have to be registered; unknown
    /// names are held to least privilege, never promoted to builtin.
    Mod(String),
}

impl ScriptCaller {
    /// Maps a runtime-reported package name onto a caller identity.
    pub fn from_mod_name(name: &str) -> Self {
        if name == BUILTIN_MOD_NAME {
            ScriptCaller::Builtin
        } else {
            ScriptCaller::Mod(name.to_string())
        }
    }
}

/// The filesystem access policy in effect for a running session.
///
/// Built once at world load from configuration and immutable afterwards;
/// checks take `&self` and share no mutable state.
#[derive(Debug)]
pub enum SandboxPolicy {
    /// Full trust: every request passes without evaluation. Selecting this
    /// mode is an explicit configuration choice and is logged at startup.
    Unrestricted,
    /// Untrusted mods are confined to the registry/world/game snapshot.
    Sandboxed {
        registry: ModRegistry,
        world: WorldLayout,
        game: Option<GameSpec>,
        /// Engine settings file no script may touch, builtin included.
        settings_file: Option<PathBuf>,
    },
}

impl SandboxPolicy {
    /// Runs the full decision pipeline for one raw path: normalize, shield
    /// the settings file, evaluate the rules.
    ///
    /// A path that fails normalization is denied, never an error.
    pub fn check_path(
        &self,
        raw: &str,
        write_required: bool,
        caller: &ScriptCaller,
    ) -> AccessDecision {
        let (registry, world, game, settings_file) = match self {
            SandboxPolicy::Unrestricted => return AccessDecision::allow_write(),
            SandboxPolicy::Sandboxed {
                registry,
                world,
                game,
                settings_file,
            } => (registry, world, game.as_ref(), settings_file.as_ref()),
        };

        let path = match policy::normalize(raw) {
            Ok(path) => path,
            Err(e) => {
                warn!("Denying unnormalizable path from {:?}: {}", caller, e);
                return AccessDecision::deny();
            }
        };

        if let Some(settings) = settings_file {
            if path == *settings {
                warn!("Denying settings file access from {:?}", caller);
                return AccessDecision::deny();
            }
        }

        let resolved;
        let requester = match caller {
            ScriptCaller::Builtin => None,
            ScriptCaller::Mod(name) => match registry.lookup(name) {
                Some(identity) => Some(identity),
                None => {
                    resolved = ModIdentity::unregistered(name);
                    Some(&resolved)
                }
            },
        };

        let request = AccessRequest {
            path: &path,
            write_required,
            requester,
        };
        policy::evaluate(&request, registry, world, game)
    }

    /// Probes write capability at `raw` without requiring it.
    pub fn is_writable(&self, raw: &str, caller: &ScriptCaller) -> bool {
        self.check_path(raw, false, caller).write_allowed
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, SandboxPolicy::Unrestricted)
    }
}
