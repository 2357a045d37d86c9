//! World layout
//!
//! Locates the active world's directory tree and the active game package.

use std::path::{Path, PathBuf};

/// Subtree of the world root reserved for world-installed mods.
pub const WORLDMODS_DIR: &str = "worldmods";

/// Subtree of the world root reserved for the world's game content.
pub const WORLD_GAME_DIR: &str = "game";

/// The active world's directory layout. Fixed for the lifetime of a running
/// world.
///
/// The two reserved subtrees are derived by joining onto the root rather
/// than canonicalized on their own, so they stay checkable before they
/// exist on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldLayout {
    root: PathBuf,
}

impl WorldLayout {
    /// `root` is expected to be absolute and canonical already; callers
    /// normalize it once at load time.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn worldmods_dir(&self) -> PathBuf {
        self.root.join(WORLDMODS_DIR)
    }

    pub fn game_dir(&self) -> PathBuf {
        self.root.join(WORLD_GAME_DIR)
    }
}

/// The active game package: id and absolute install directory.
///
/// Not to be confused with the world's reserved `game` subtree, which holds
/// per-world game content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSpec {
    pub id: String,
    pub path: PathBuf,
}

impl GameSpec {
    pub fn new(id: &str, path: PathBuf) -> Self {
        Self {
            id: id.to_string(),
            path,
        }
    }
}
