//! End-to-end checks of the sandbox decision pipeline: configuration,
//! mod discovery, normalization, and rule evaluation over a real
//! directory tree.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use rax_mod_sandbox::config::SecurityConfig;
use rax_mod_sandbox::guard::{SandboxPolicy, ScriptCaller};

struct Install {
    _dir: tempfile::TempDir,
    user: PathBuf,
    policy: SandboxPolicy,
}

/// Builds a typical installation: a user dir holding a game with a bundled
/// mod, a global mod dir, a world, and the engine settings file.
fn install() -> Install {
    let dir = tempfile::tempdir().unwrap();
    let user = dir.path().canonicalize().unwrap();

    fs::create_dir_all(user.join("games/devtest/mods/soundstuff")).unwrap();
    File::create(user.join("games/devtest/mods/soundstuff/init.lua")).unwrap();
    fs::create_dir_all(user.join("mods/other_mod")).unwrap();
    File::create(user.join("mods/other_mod/init.lua")).unwrap();
    fs::create_dir_all(user.join("worlds/world1")).unwrap();
    File::create(user.join("rax.conf")).unwrap();

    let config = SecurityConfig {
        mod_security: true,
        world_root: user.join("worlds/world1").display().to_string(),
        game_id: Some("devtest".to_string()),
        game_dir: Some(user.join("games/devtest").display().to_string()),
        mod_dirs: vec![
            user.join("games/devtest/mods").display().to_string(),
            user.join("mods").display().to_string(),
        ],
        settings_file: Some(user.join("rax.conf").display().to_string()),
    };
    let policy = config.build_policy().unwrap();

    Install {
        _dir: dir,
        user,
        policy,
    }
}

fn s(path: &Path) -> String {
    path.display().to_string()
}

fn can_read(install: &Install, path: &Path, caller: &ScriptCaller) -> bool {
    install.policy.check_path(&s(path), false, caller).allowed
}

fn can_write(install: &Install, path: &Path, caller: &ScriptCaller) -> bool {
    install
        .policy
        .check_path(&s(path), true, caller)
        .permits(true)
}

#[test]
fn mod_access_across_the_installation() {
    let install = install();
    let user = &install.user;
    let caller = ScriptCaller::Mod("soundstuff".to_string());

    let game = user.join("games/devtest");
    let game_mods = user.join("games/devtest/mods");
    let own = user.join("games/devtest/mods/soundstuff");

    assert!(!can_read(&install, user, &caller));
    assert!(!can_read(&install, &user.join("mods"), &caller));

    assert!(can_read(&install, &game, &caller));
    assert!(!can_write(&install, &game, &caller));
    assert!(can_read(&install, &game_mods, &caller));
    assert!(!can_write(&install, &game_mods, &caller));

    assert!(can_read(&install, &own, &caller));
    assert!(can_write(&install, &own, &caller));
    assert!(can_write(&install, &own.join("cache/samples.dat"), &caller));
}

#[test]
fn other_mod_content_is_read_only() {
    let install = install();
    let caller = ScriptCaller::Mod("soundstuff".to_string());
    let other = install.user.join("mods/other_mod/init.lua");

    let read = install.policy.check_path(&s(&other), false, &caller);
    assert!(read.allowed);
    assert!(!read.write_allowed);

    assert!(!can_write(&install, &other, &caller));
}

#[test]
fn reserved_world_subtrees_stay_denied_before_they_exist() {
    let install = install();
    let caller = ScriptCaller::Mod("soundstuff".to_string());
    let world = install.user.join("worlds/world1");

    // Neither subtree has been created; the policy must still refuse to
    // let a mod bring them into existence.
    assert!(!world.join("worldmods").exists());
    assert!(!can_write(&install, &world.join("worldmods/soundstuff/init.lua"), &caller));
    assert!(!can_read(&install, &world.join("worldmods"), &caller));
    assert!(!can_write(&install, &world.join("game/items.conf"), &caller));

    // The rest of the world stays open for mod state.
    assert!(can_write(&install, &world.join("mod_storage/soundstuff.db"), &caller));
    assert!(can_write(&install, &world, &caller));
}

#[test]
fn builtin_is_exempt_except_for_the_settings_file() {
    let install = install();
    let caller = ScriptCaller::Builtin;

    assert!(can_write(&install, &install.user, &caller));
    assert!(can_write(
        &install,
        &install.user.join("worlds/world1/worldmods"),
        &caller
    ));

    let settings = install.user.join("rax.conf");
    assert!(!can_read(&install, &settings, &caller));
    assert!(!can_write(&install, &settings, &caller));
}

#[test]
fn settings_file_is_shielded_from_mods() {
    let install = install();
    let caller = ScriptCaller::Mod("soundstuff".to_string());
    let settings = install.user.join("rax.conf");

    assert!(!can_read(&install, &settings, &caller));
    assert!(!can_write(&install, &settings, &caller));
}

#[test]
fn unregistered_caller_gets_least_privilege() {
    let install = install();
    let caller = ScriptCaller::Mod("ghost".to_string());

    assert!(!can_read(&install, &install.user, &caller));

    // World state and installed mod content follow the ordinary rules.
    assert!(can_write(
        &install,
        &install.user.join("worlds/world1/mod_storage/ghost.db"),
        &caller
    ));
    let read = install.policy.check_path(
        &s(&install.user.join("mods/other_mod/init.lua")),
        false,
        &caller,
    );
    assert!(read.allowed);
    assert!(!read.write_allowed);
}

#[test]
fn unnormalizable_paths_are_denied_not_errors() {
    let install = install();
    let caller = ScriptCaller::Mod("soundstuff".to_string());

    assert!(!install.policy.check_path("", false, &caller).allowed);
    assert!(!install.policy.check_path("a\0b", false, &caller).allowed);

    // Parent traversal through a directory that does not exist.
    let raw = format!(
        "{}/worlds/world1/missing/../../../../etc/passwd",
        install.user.display()
    );
    assert!(!install.policy.check_path(&raw, false, &caller).allowed);
}

#[cfg(unix)]
#[test]
fn symlink_out_of_own_directory_does_not_escape() {
    let install = install();
    let caller = ScriptCaller::Mod("soundstuff".to_string());
    let own = install.user.join("games/devtest/mods/soundstuff");

    File::create(install.user.join("treasure.txt")).unwrap();
    std::os::unix::fs::symlink(&install.user, own.join("leak")).unwrap();

    // Lexically inside the mod's own directory, but the link resolves to
    // the user dir, which is off limits.
    let raw = own.join("leak/treasure.txt");
    assert!(!can_read(&install, &raw, &caller));
    assert!(!can_write(&install, &raw, &caller));
}

#[test]
fn write_capability_can_be_probed_without_requiring_it() {
    let install = install();
    let caller = ScriptCaller::Mod("soundstuff".to_string());

    let own = install.user.join("games/devtest/mods/soundstuff/init.lua");
    assert!(install.policy.is_writable(&s(&own), &caller));

    let other = install.user.join("mods/other_mod/init.lua");
    assert!(!install.policy.is_writable(&s(&other), &caller));

    let storage = install.user.join("worlds/world1/mod_storage");
    assert!(install.policy.is_writable(&s(&storage), &caller));
}

#[test]
fn unrestricted_mode_bypasses_every_rule() {
    let install = install();
    let policy = SandboxPolicy::Unrestricted;
    let caller = ScriptCaller::Mod("soundstuff".to_string());

    assert!(policy.is_unrestricted());
    for path in [
        install.user.clone(),
        install.user.join("worlds/world1/worldmods/x"),
        install.user.join("rax.conf"),
    ] {
        let decision = policy.check_path(&s(&path), true, &caller);
        assert!(decision.allowed && decision.write_allowed);
    }
}

#[test]
fn unrestricted_is_opt_in_through_configuration() {
    let install = install();

    let config = SecurityConfig {
        mod_security: false,
        world_root: String::new(),
        game_id: None,
        game_dir: None,
        mod_dirs: vec![],
        settings_file: None,
    };
    let policy = config.build_policy().unwrap();
    assert!(policy.is_unrestricted());

    let caller = ScriptCaller::Mod("anything".to_string());
    assert!(policy.check_path(&s(&install.user), true, &caller).allowed);
}
