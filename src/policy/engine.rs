//! Access policy engine
//!
//! The pure decision function for script-originated filesystem access.

use std::path::Path;

use crate::policy::results::AccessDecision;
use crate::registry::{ModIdentity, ModRegistry};
use crate::world::{GameSpec, WorldLayout};

/// One script-originated access request, path already normalized.
#[derive(Debug, Clone, Copy)]
pub struct AccessRequest<'a> {
    /// Canonical absolute path being accessed.
    pub path: &'a Path,
    /// Whether the operation needs write capability to proceed.
    pub write_required: bool,
    /// Calling identity; `None` is the trusted builtin context.
    pub requester: Option<&'a ModIdentity>,
}

/// Segment-aware path containment.
///
/// True iff `candidate` equals `base` or starts with `base` followed by a
/// separator. A plain string prefix is not enough: `/w/mods` must not be
/// treated as containing `/w/modsextra`.
pub fn path_contains(base: &Path, candidate: &Path) -> bool {
    candidate.starts_with(base)
}

/// Decides whether `request` may proceed.
///
/// Total, deterministic, and free of I/O; reads only the immutable
/// snapshots it is handed, so it is safe to call concurrently from any
/// thread. First applicable rule wins:
///
/// 1. The builtin context may do anything.
/// 2. A registered mod has full access to its own install directory. The
///    directory is taken from the registry entry for the requester's name,
///    never from the requester value itself, so a fabricated identity
///    cannot smuggle in a directory it does not own.
/// 3. Any installed mod's directory is readable by everyone; mod content
///    is not secret.
/// 4. The active game's directory is likewise readable by everyone.
/// 5. The world's `worldmods` and `game` subtrees are untouchable, whether
///    or not they exist yet. Allowing even discovery there would let an
///    installed mod shadow trusted content by dropping a same-named file.
/// 6. Anywhere else under the world root is read-write; that is where
///    per-world mod state lives.
/// 7. Everything else is denied.
pub fn evaluate(
    request: &AccessRequest<'_>,
    registry: &ModRegistry,
    world: &WorldLayout,
    game: Option<&GameSpec>,
) -> AccessDecision {
    let requester = match request.requester {
        None => return AccessDecision::allow_write(),
        Some(identity) if identity.trusted => return AccessDecision::allow_write(),
        Some(identity) => identity,
    };

    // Own install directory. Checked even for read requests so the
    // write_allowed flag comes back right.
    if let Some(known) = registry.lookup(&requester.name) {
        if path_contains(&known.install_dir, request.path) {
            return AccessDecision::allow_write();
        }
    }

    if !request.write_required {
        for identity in registry.all() {
            if path_contains(&identity.install_dir, request.path) {
                return AccessDecision::allow_read_only();
            }
        }

        if let Some(game) = game {
            if path_contains(&game.path, request.path) {
                return AccessDecision::allow_read_only();
            }
        }
    }

    if path_contains(&world.worldmods_dir(), request.path)
        || path_contains(&world.game_dir(), request.path)
    {
        return AccessDecision::deny();
    }

    if path_contains(world.root(), request.path) {
        return AccessDecision::allow_write();
    }

    AccessDecision::deny()
}
