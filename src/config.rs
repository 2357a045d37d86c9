//! Configuration management for the RAX mod sandbox
//!
//! Loads the process-wide sandbox configuration from config.toml with
//! environment overrides, validates it, and assembles the access policy
//! snapshot a session runs with.

use config::{Config, Environment, File};
use log::{info, warn};
use serde::Deserialize;
use std::path::Path;

use crate::error::SandboxError;
use crate::guard::SandboxPolicy;
use crate::policy;
use crate::registry::{ModRegistry, discover_mods};
use crate::world::{GameSpec, WorldLayout};

/// Sandbox configuration, loaded once at startup and fixed for the session.
#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    /// `true` confines mods to the sandbox; `false` grants every script
    /// unrestricted filesystem access. Disabling is an explicit operational
    /// choice and is logged loudly at startup.
    pub mod_security: bool,

    /// Root directory of the active world.
    pub world_root: String,

    /// Id of the active game.
    pub game_id: Option<String>,

    /// Install directory of the active game.
    pub game_dir: Option<String>,

    /// Directories scanned for installed mods at load.
    pub mod_dirs: Vec<String>,

    /// Engine settings file shielded from every script.
    pub settings_file: Option<String>,
}

impl SecurityConfig {
    /// Load configuration from config.toml with environment overrides
    /// (`RAX_SANDBOX_*`, `__` as the nesting separator).
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config"))
            .add_source(Environment::with_prefix("RAX_SANDBOX").separator("__"))
            .build()?;

        let config: SecurityConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.mod_security && self.world_root.is_empty() {
            return Err(config::ConfigError::Message(
                "world_root cannot be empty when mod_security is enabled".into(),
            ));
        }

        if self.game_id.is_some() != self.game_dir.is_some() {
            return Err(config::ConfigError::Message(
                "game_id and game_dir must be set together".into(),
            ));
        }

        if self.mod_dirs.iter().any(|dir| dir.is_empty()) {
            return Err(config::ConfigError::Message(
                "mod_dirs entries cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Assembles the immutable policy snapshot for a session: canonicalize
    /// the world root, discover and register mods, resolve the game and the
    /// shielded settings file.
    pub fn build_policy(&self) -> Result<SandboxPolicy, SandboxError> {
        if !self.mod_security {
            warn!("Mod security is DISABLED: scripts get unrestricted filesystem access");
            return Ok(SandboxPolicy::Unrestricted);
        }

        let world = WorldLayout::new(policy::normalize(&self.world_root)?);

        let mut registry = ModRegistry::new();
        for dir in &self.mod_dirs {
            let count = discover_mods(&mut registry, Path::new(dir))?;
            info!("Registered {} mod(s) from {}", count, dir);
        }

        let game = match (&self.game_id, &self.game_dir) {
            (Some(id), Some(dir)) => Some(GameSpec::new(id, policy::normalize(dir)?)),
            _ => None,
        };

        let settings_file = match &self.settings_file {
            Some(path) => Some(policy::normalize(path)?),
            None => None,
        };

        info!(
            "Sandbox active: world root {:?}, {} mod(s) registered",
            world.root(),
            registry.len()
        );

        Ok(SandboxPolicy::Sandboxed {
            registry,
            world,
            game,
            settings_file,
        })
    }
}
